//! tl list command implementation

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::record::TaskRecord;
use crate::session::Session;
use crate::view::StatusFilter;

pub fn run(
    session: &mut Session,
    status: StatusFilter,
    tags: Vec<String>,
    search: Option<String>,
    options: OutputOptions,
) -> Result<()> {
    session.set_status_filter(status);
    session.set_selected_tags(tags.iter().cloned().collect());
    if let Some(query) = search.as_deref() {
        session.set_search_query(query);
    }

    let view = session.view();

    let remaining = match view.active_count {
        1 => "1 task remaining".to_string(),
        n => format!("{n} tasks remaining"),
    };

    let mut human = HumanOutput::new(format!(
        "tl list: {} shown, {}",
        view.visible.len(),
        remaining
    ));
    for task in &view.visible {
        human.push_detail(render_line(task));
    }
    if view.visible.is_empty() {
        human.push_detail("no matching tasks".to_string());
    }
    for tag in &tags {
        if !view.tags.contains(tag) {
            human.push_warning(format!("tag '#{tag}' is not in use"));
        }
    }

    emit_success(options, "list", &view, Some(&human))?;
    Ok(())
}

fn render_line(task: &TaskRecord) -> String {
    let check = if task.done { "x" } else { " " };
    let mut line = format!(
        "[{check}] {} {} ({})",
        short_id(task),
        task.title,
        task.priority.as_str()
    );
    if !task.description.is_empty() {
        line.push_str(&format!(" - {}", task.description));
    }
    for tag in &task.tags {
        line.push_str(&format!(" #{tag}"));
    }
    line
}

fn short_id(task: &TaskRecord) -> String {
    task.id.to_string()[..8].to_string()
}
