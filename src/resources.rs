//! Static per-resource descriptors.
//!
//! Every endpoint in the API is the same pipeline instantiated over one of
//! these. The allow-lists are compile-time constants and never derived from
//! request input, which is what keeps mass-assignment off the table.

/// Sort key and direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: &'static str,
    pub ascending: bool,
}

pub const fn asc(column: &'static str) -> Option<SortOrder> {
    Some(SortOrder { column, ascending: true })
}

pub const fn desc(column: &'static str) -> Option<SortOrder> {
    Some(SortOrder { column, ascending: false })
}

/// Everything the generic pipeline needs to serve one resource.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    /// Table name, interpolated (quoted) into queries. Always a constant.
    pub table: &'static str,
    /// Human label used in not-found messages ("<label> not found").
    pub label: &'static str,
    /// Fields that must be present and non-empty on create.
    pub required: &'static [&'static str],
    /// The only fields a write may ever touch.
    pub writable: &'static [&'static str],
    /// Default list ordering; `None` leaves row order to the database.
    pub order: Option<SortOrder>,
    /// Foreign-key column for parent-scoped routes and junction links.
    pub parent_key: Option<&'static str>,
    /// Legacy body alias resolved at the parse boundary: (canonical, alias).
    /// The canonical key wins when both are present.
    pub alias: Option<(&'static str, &'static str)>,
}

impl Resource {
    const fn base(table: &'static str, label: &'static str) -> Self {
        Self {
            table,
            label,
            required: &[],
            writable: &[],
            order: desc("created_at"),
            parent_key: None,
            alias: None,
        }
    }
}

pub const RECIPES: Resource = Resource {
    required: &["title"],
    writable: &["title", "notes"],
    ..Resource::base("recipes", "Recipe")
};

pub const RECIPE_INGREDIENTS: Resource = Resource {
    required: &["name"],
    writable: &["name", "qty_text"],
    order: asc("created_at"),
    parent_key: Some("recipe_id"),
    ..Resource::base("recipe_ingredients", "Ingredient")
};

pub const MEDIA: Resource = Resource {
    required: &["url"],
    writable: &["url", "type", "title", "notes"],
    ..Resource::base("media", "Media")
};

pub const SHOPPING_ITEMS: Resource = Resource {
    required: &["name"],
    writable: &["name", "qty_text", "is_checked"],
    ..Resource::base("shopping_items", "Shopping item")
};

pub const DIET_DAYS: Resource = Resource {
    required: &["label"],
    writable: &["label", "sort_order"],
    order: asc("sort_order"),
    ..Resource::base("diet_days", "Diet day")
};

pub const DIET_MEALS: Resource = Resource {
    required: &["meal_type", "title"],
    writable: &["meal_type", "title", "ingredients", "instructions", "sort_order"],
    order: asc("sort_order"),
    parent_key: Some("day_id"),
    ..Resource::base("diet_meals", "Diet meal")
};

/// Listing order is pinned at startup: `session_date` when the deployed
/// schema has it, `created_at` otherwise. See `Db::has_column`.
pub const WORKOUT_SESSIONS: Resource = Resource {
    required: &["title"],
    writable: &["title", "notes", "session_date"],
    order: desc("session_date"),
    alias: Some(("title", "name")),
    ..Resource::base("workout_sessions", "Session")
};

pub const WORKOUT_SETS: Resource = Resource {
    required: &["exercise"],
    writable: &["exercise", "reps", "weight", "notes"],
    order: asc("created_at"),
    parent_key: Some("session_id"),
    alias: Some(("exercise", "name")),
    ..Resource::base("workout_sets", "Workout set")
};

// Junction tables: link/unlink only, no partial updates.

pub const RECIPE_MEDIA: Resource = Resource {
    required: &["media_id"],
    writable: &["media_id"],
    order: None,
    parent_key: Some("recipe_id"),
    ..Resource::base("recipe_media", "Recipe media link")
};

pub const WORKOUT_SET_MEDIA: Resource = Resource {
    required: &["media_id"],
    writable: &["media_id"],
    order: asc("sort_order"),
    parent_key: Some("set_id"),
    ..Resource::base("workout_set_media", "Workout set media link")
};
