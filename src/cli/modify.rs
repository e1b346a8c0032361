//! tl toggle / rm / clear command implementations

use crate::error::Result;
use crate::events::{self, Event, EventKind};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::session::Session;

#[derive(serde::Serialize)]
struct ToggleReport {
    id: String,
    done: bool,
    active_count: usize,
}

#[derive(serde::Serialize)]
struct RmReport {
    id: String,
    total: usize,
}

#[derive(serde::Serialize)]
struct ClearReport {
    removed: usize,
    total: usize,
}

pub fn toggle(
    session: &mut Session,
    id: &str,
    events: Option<&str>,
    options: OutputOptions,
) -> Result<()> {
    let id = session.resolve_id(id)?;
    session.toggle(id)?;

    let view = session.view();
    let done = session
        .store()
        .tasks()
        .iter()
        .find(|task| task.id == id)
        .map(|task| task.done)
        .unwrap_or(false);

    events::emit_to(
        events,
        Event::new(EventKind::TaskToggled)
            .with_data(serde_json::json!({ "id": id.to_string(), "done": done }))?,
    )?;

    let report = ToggleReport {
        id: id.to_string(),
        done,
        active_count: view.active_count,
    };

    let state = if done { "completed" } else { "active" };
    let mut human = HumanOutput::new(format!("tl toggle: task is now {state}"));
    human.push_summary("id", id.to_string());
    human.push_summary("remaining", view.active_count.to_string());

    emit_success(options, "toggle", &report, Some(&human))?;
    Ok(())
}

pub fn rm(
    session: &mut Session,
    id: &str,
    events: Option<&str>,
    options: OutputOptions,
) -> Result<()> {
    let id = session.resolve_id(id)?;
    session.delete(id)?;

    events::emit_to(
        events,
        Event::new(EventKind::TaskDeleted)
            .with_data(serde_json::json!({ "id": id.to_string() }))?,
    )?;

    let report = RmReport {
        id: id.to_string(),
        total: session.store().len(),
    };

    let mut human = HumanOutput::new("tl rm: deleted task");
    human.push_summary("id", id.to_string());
    human.push_summary("remaining tasks", session.store().len().to_string());

    emit_success(options, "rm", &report, Some(&human))?;
    Ok(())
}

pub fn clear(
    session: &mut Session,
    events: Option<&str>,
    options: OutputOptions,
) -> Result<()> {
    let removed = session.clear_completed()?;

    events::emit_to(
        events,
        Event::new(EventKind::CompletedCleared)
            .with_data(serde_json::json!({ "removed": removed }))?,
    )?;

    let report = ClearReport {
        removed,
        total: session.store().len(),
    };

    let header = if removed == 0 {
        "tl clear: nothing to do".to_string()
    } else {
        format!("tl clear: removed {removed} completed")
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("remaining tasks", session.store().len().to_string());

    emit_success(options, "clear", &report, Some(&human))?;
    Ok(())
}
