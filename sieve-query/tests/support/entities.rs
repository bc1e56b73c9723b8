//! Shared test entities: the blog domain the filter layer fronts.
//!
//! `Post` and `User` declare the same filterable paths, operator sets, and
//! value kinds as the production entities they stand in for.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use sieve_core::{EntitySchema, FieldKind, Filterable, FilterOperator, FilterValue};
use sieve_query::FieldAccess;

const SCALAR_OPS: [FilterOperator; 4] = [
    FilterOperator::Eq,
    FilterOperator::In,
    FilterOperator::NotIn,
    FilterOperator::Ne,
];

const TEXT_OPS: [FilterOperator; 7] = [
    FilterOperator::Eq,
    FilterOperator::Ne,
    FilterOperator::In,
    FilterOperator::NotIn,
    FilterOperator::Like,
    FilterOperator::StartsWith,
    FilterOperator::EndsWith,
];

const DATE_OPS: [FilterOperator; 6] = [
    FilterOperator::Eq,
    FilterOperator::Gt,
    FilterOperator::Gte,
    FilterOperator::Lt,
    FilterOperator::Lte,
    FilterOperator::Ne,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Filterable for Post {
    fn entity_name() -> &'static str {
        "Post"
    }

    fn filter_schema() -> &'static EntitySchema {
        static SCHEMA: Lazy<EntitySchema> = Lazy::new(|| {
            EntitySchema::builder("Post")
                .field("id", &SCALAR_OPS, FieldKind::Int)
                .field("title", &TEXT_OPS, FieldKind::String)
                .field(
                    "content",
                    &[
                        FilterOperator::Eq,
                        FilterOperator::Ne,
                        FilterOperator::Like,
                        FilterOperator::StartsWith,
                        FilterOperator::EndsWith,
                    ],
                    FieldKind::String,
                )
                .field("author.id", &SCALAR_OPS, FieldKind::Int)
                .field("author.firstName", &TEXT_OPS, FieldKind::String)
                .field("author.lastName", &TEXT_OPS, FieldKind::String)
                .field("createdAt", &DATE_OPS, FieldKind::Date)
                .field("updatedAt", &DATE_OPS, FieldKind::Date)
                .build()
        });
        &SCHEMA
    }
}

impl FieldAccess for Post {
    fn field(&self, reference: &str) -> Option<FilterValue> {
        match reference {
            "p.id" => Some(FilterValue::Int(self.id)),
            "p.title" => Some(FilterValue::Str(self.title.clone())),
            "p.content" => Some(FilterValue::Str(self.content.clone())),
            "p.createdAt" => Some(FilterValue::Date(self.created_at)),
            "p.updatedAt" => self.updated_at.map(FilterValue::Date),
            "author_filter.id" => Some(FilterValue::Int(self.author.id)),
            "author_filter.firstName" => Some(FilterValue::Str(self.author.first_name.clone())),
            "author_filter.lastName" => Some(FilterValue::Str(self.author.last_name.clone())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl Filterable for User {
    fn entity_name() -> &'static str {
        "User"
    }

    fn filter_schema() -> &'static EntitySchema {
        static SCHEMA: Lazy<EntitySchema> = Lazy::new(|| {
            EntitySchema::builder("User")
                .field("id", &SCALAR_OPS, FieldKind::Int)
                .field("email", &TEXT_OPS, FieldKind::String)
                .field("firstName", &TEXT_OPS, FieldKind::String)
                .field("lastName", &TEXT_OPS, FieldKind::String)
                .field("createdAt", &DATE_OPS, FieldKind::Date)
                .build()
        });
        &SCHEMA
    }
}

impl FieldAccess for User {
    fn field(&self, reference: &str) -> Option<FilterValue> {
        match reference {
            "u.id" => Some(FilterValue::Int(self.id)),
            "u.email" => Some(FilterValue::Str(self.email.clone())),
            "u.firstName" => Some(FilterValue::Str(self.first_name.clone())),
            "u.lastName" => Some(FilterValue::Str(self.last_name.clone())),
            "u.createdAt" => Some(FilterValue::Date(self.created_at)),
            _ => None,
        }
    }
}

pub fn john() -> Author {
    Author {
        id: 1,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
    }
}

pub fn jane() -> Author {
    Author {
        id: 2,
        first_name: "Jane".to_string(),
        last_name: "Roeson".to_string(),
    }
}

pub fn sample_posts() -> Vec<Post> {
    let day = |d| Utc.with_ymd_and_hms(2025, 1, d, 12, 0, 0).unwrap();
    vec![
        Post {
            id: 1,
            title: "First Post".to_string(),
            content: "Hello world".to_string(),
            author: john(),
            created_at: day(1),
            updated_at: None,
        },
        Post {
            id: 2,
            title: "Second Post".to_string(),
            content: "More words".to_string(),
            author: jane(),
            created_at: day(2),
            updated_at: Some(day(3)),
        },
        Post {
            id: 3,
            title: "Third Post".to_string(),
            content: "Final words".to_string(),
            author: john(),
            created_at: day(5),
            updated_at: None,
        },
        Post {
            id: 4,
            title: "Unrelated Draft".to_string(),
            content: "Scratch".to_string(),
            author: jane(),
            created_at: day(9),
            updated_at: None,
        },
    ]
}
