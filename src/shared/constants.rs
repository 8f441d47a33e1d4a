/// Categories seeded into an empty database, in insertion order.
/// The list is never diffed against existing rows; once any category
/// exists the seed step is a no-op.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Plumber",
    "Electrician",
    "Tutor",
    "Event Planner",
    "Painter",
    "Carpenter",
    "Cleaner",
    "Gardener",
    "AC Repair",
    "Mechanic",
];

/// How many of the newest approved listings the home page shows
pub const LATEST_LISTINGS_LIMIT: i64 = 6;
