//! tl tags command implementation

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::session::Session;

#[derive(serde::Serialize)]
struct TagsReport {
    tags: Vec<String>,
}

pub fn run(session: &Session, options: OutputOptions) -> Result<()> {
    let tags = session.view().tags;

    let mut human = HumanOutput::new(format!("tl tags: {} in use", tags.len()));
    for tag in &tags {
        human.push_detail(format!("#{tag}"));
    }

    emit_success(options, "tags", &TagsReport { tags }, Some(&human))?;
    Ok(())
}
