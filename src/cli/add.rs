//! tl add command implementation

use crate::config::Config;
use crate::error::Result;
use crate::events::{self, Event, EventKind};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::record::{split_tag_input, Priority, TaskDraft, TaskRecord};
use crate::session::Session;

pub struct Options {
    pub title: String,
    pub desc: String,
    pub tags: Option<String>,
    pub priority: Option<Priority>,
}

#[derive(serde::Serialize)]
struct AddReport<'a> {
    task: &'a TaskRecord,
    total: usize,
}

pub fn run(
    session: &mut Session,
    config: &Config,
    opts: Options,
    events: Option<&str>,
    options: OutputOptions,
) -> Result<()> {
    let priority = match opts.priority {
        Some(priority) => priority,
        None => config.default_priority()?,
    };
    let tags = opts
        .tags
        .as_deref()
        .map(split_tag_input)
        .unwrap_or_default();

    let draft = TaskDraft::new(&opts.title, &opts.desc, tags, priority)?;
    let record = session.create(draft)?;

    events::emit_to(
        events,
        Event::new(EventKind::TaskCreated).with_data(&record)?,
    )?;

    let report = AddReport {
        task: &record,
        total: session.store().len(),
    };

    let mut human = HumanOutput::new(format!("tl add: created \"{}\"", record.title));
    human.push_summary("id", record.id.to_string());
    human.push_summary("priority", record.priority.as_str());
    if !record.tags.is_empty() {
        human.push_summary("tags", record.tags.join(", "));
    }
    human.push_next_step("tl list");

    emit_success(options, "add", &report, Some(&human))?;
    Ok(())
}
