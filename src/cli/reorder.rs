//! tl reorder command implementation
//!
//! The caller supplies the new order of the tasks it was looking at; tasks
//! not mentioned keep their relative positions among themselves.

use ulid::Ulid;

use crate::error::Result;
use crate::events::{self, Event, EventKind};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::session::Session;

#[derive(serde::Serialize)]
struct ReorderReport {
    order: Vec<String>,
}

pub fn run(
    session: &mut Session,
    ids: &[String],
    events: Option<&str>,
    options: OutputOptions,
) -> Result<()> {
    // Resolve up front so a typo fails before anything moves.
    let resolved: Vec<Ulid> = ids
        .iter()
        .map(|id| session.resolve_id(id))
        .collect::<Result<_>>()?;

    session.reorder(&resolved)?;

    let order: Vec<String> = session
        .store()
        .tasks()
        .iter()
        .map(|task| task.id.to_string())
        .collect();

    events::emit_to(
        events,
        Event::new(EventKind::OrderChanged)
            .with_data(serde_json::json!({ "order": order }))?,
    )?;

    let mut human = HumanOutput::new(format!("tl reorder: moved {} tasks", resolved.len()));
    for task in session.store().tasks() {
        human.push_detail(format!("{} {}", &task.id.to_string()[..8], task.title));
    }

    emit_success(options, "reorder", &ReorderReport { order }, Some(&human))?;
    Ok(())
}
