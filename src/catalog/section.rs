use crate::core::state::CatalogState;
use crate::models::status::classify;
use crate::models::user::UserRecord;
use crate::stores::repository::Repository;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

/// One numbered feature in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            lines: Vec::new(),
        }
    }

    fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub header: Vec<String>,
    pub sections: Vec<Section>,
}

fn describe(user: &UserRecord) -> String {
    format!("User ID: {}, Name: {}", user.id(), user.name())
}

impl Catalog {
    /// Run every section against the shared state, in order
    pub fn build(state: &CatalogState) -> Result<Self> {
        let sections = vec![
            write_once_section(state)?,
            record_equality_section(),
            entry_point_section(),
            pattern_matching_section(&state.config.catalog.attempts),
            inferred_construction_section(state),
            typed_lookup_section(state),
        ];

        info!(
            sections = sections.len(),
            users = state.user_store.len(),
            "Catalog built"
        );

        Ok(Self {
            header: vec![
                "User record catalog".to_string(),
                "Immutable records, value equality, status classification and typed lookups"
                    .to_string(),
            ],
            sections,
        })
    }
}

fn write_once_section(state: &CatalogState) -> Result<Section> {
    let user = UserRecord::builder()
        .id("U001")
        .name("Alice")
        .build()
        .context("Failed to build write-once record")?;

    let renamed = user.with_name("Alicia");
    state.user_store.add_user(user.clone());
    debug!(user_id = user.id(), "Write-once record registered");

    Ok(Section::new(
        "1.- Write-once fields",
        "Fields are assigned once at construction; changes produce a new record.",
    )
    .line(describe(&user))
    .line(format!("Renamed copy: {}", describe(&renamed)))
    .line(format!("Original after rename: {}", describe(&user))))
}

fn record_equality_section() -> Section {
    let user1 = UserRecord::new("U002", "Maria");
    let user2 = UserRecord::new("U003", "Alice");
    let user1_again = UserRecord::new("U002", "Maria");

    Section::new(
        "2.- Value-based equality",
        "Records compare by their field values, not by where they live in memory.",
    )
    .line(describe(&user1))
    .line(describe(&user2))
    .line(format!("user1 == user2: {}", user1 == user2))
    .line(format!(
        "user1 == independently built copy: {}",
        user1 == user1_again
    ))
}

fn entry_point_section() -> Section {
    Section::new(
        "3.- Program entry",
        "The binary loads its configuration, sets up logging and prints this catalog.",
    )
}

fn pattern_matching_section(attempts: &[i64]) -> Section {
    attempts.iter().fold(
        Section::new(
            "4.- Pattern matching",
            "Login attempts map to a status through ordered range arms.",
        ),
        |section, &count| section.line(format!("{} attempts -> {}", count, classify(count))),
    )
}

fn inferred_construction_section(state: &CatalogState) -> Section {
    let user3: UserRecord = ("U003", "Adolf").into();
    state.user_store.add_user(user3.clone());

    Section::new(
        "5.- Inferred construction",
        "The target type is taken from the binding, so the constructor name is omitted.",
    )
    .line("let user3: UserRecord = (\"U003\", \"Adolf\").into();")
    .line(describe(&user3))
}

fn typed_lookup_section(state: &CatalogState) -> Section {
    let mut section = Section::new(
        "6.- Typed repository lookups",
        "Each repository names the exact record type it returns.",
    );

    if let Some(user) = state.repository.get_by_id("U005") {
        section = section.line(format!("Placeholder lookup: {}", describe(&user)));
    }

    section = match state.user_store.get_by_id("U001") {
        Some(user) => section.line(format!("Store lookup: {}", describe(&user))),
        None => section.line("Store lookup: U001 not registered"),
    };

    section.line(format!("Registered users: {}", state.user_store.len()))
}
