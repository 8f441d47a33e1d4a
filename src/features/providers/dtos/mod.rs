mod provider_dto;

pub use provider_dto::{NewProvider, ProviderView, RegisterProviderForm, SearchQuery};
