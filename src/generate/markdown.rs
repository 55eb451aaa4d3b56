//! Markdown rendering of generated documents.
//!
//! Pure, deterministic functions of the input records; array order is
//! preserved everywhere.

use crate::generate::types::{GeneratedResources, MeetingNotes, PrdDocument, PrdRequirement};

/// Render notes, then the PRD when present, separated by a rule.
pub fn render_markdown(resources: &GeneratedResources) -> String {
    let mut out = render_notes(&resources.notes);
    if let Some(prd) = &resources.prd {
        out.push_str("\n---\n\n");
        out.push_str(&render_prd(prd));
    }
    out
}

fn render_notes(notes: &MeetingNotes) -> String {
    let mut out = format!("# {}\n", notes.title);

    if !notes.attendees.is_empty() {
        out.push_str(&format!("\n**Attendees:** {}\n", notes.attendees.join(", ")));
    }

    out.push_str("\n## Summary\n\n");
    out.push_str(&notes.summary);
    out.push('\n');

    if !notes.decisions.is_empty() {
        out.push_str("\n## Decisions\n\n");
        for (i, decision) in notes.decisions.iter().enumerate() {
            out.push_str(&format!("{}. {}", i + 1, decision.description));
            if let Some(made_by) = decision.made_by.as_deref() {
                out.push_str(&format!(" ({})", made_by));
            }
            out.push('\n');
        }
    }

    if !notes.action_items.is_empty() {
        out.push_str("\n## Action Items\n\n");
        out.push_str("| ID | Action | Owner | Deadline |\n");
        out.push_str("|----|--------|-------|----------|\n");
        for item in &notes.action_items {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                item.id,
                escape_cell(&item.description),
                item.owner.as_deref().unwrap_or("-"),
                item.deadline.as_deref().unwrap_or("-"),
            ));
        }
    }

    if !notes.deliverables.is_empty() {
        out.push_str("\n## Deliverables\n\n");
        for deliverable in &notes.deliverables {
            out.push_str(&format!(
                "- **{}**: {}",
                deliverable.name, deliverable.description
            ));
            if let Some(timeline) = deliverable.timeline.as_deref() {
                out.push_str(&format!(" ({})", timeline));
            }
            out.push('\n');
        }
    }

    if !notes.open_questions.is_empty() {
        out.push_str("\n## Open Questions\n\n");
        for question in &notes.open_questions {
            out.push_str(&format!("- [ ] {}\n", question));
        }
    }

    out
}

fn render_prd(prd: &PrdDocument) -> String {
    let mut out = format!("# PRD: {}\n\n## Overview\n\n{}\n", prd.title, prd.overview);

    out.push_str("\n## Requirements\n");
    out.push_str(&render_requirement_group("Must Have", &prd.must_have));
    out.push_str(&render_requirement_group("Should Have", &prd.should_have));
    out.push_str(&render_requirement_group("Could Have", &prd.could_have));

    if !prd.open_questions.is_empty() {
        out.push_str("\n## Open Questions\n\n");
        for question in &prd.open_questions {
            out.push_str(&format!("- [ ] {}\n", question));
        }
    }

    out
}

fn render_requirement_group(heading: &str, requirements: &[PrdRequirement]) -> String {
    if requirements.is_empty() {
        return String::new();
    }

    let mut out = format!("\n### {}\n\n", heading);
    out.push_str("| ID | Requirement | Rationale |\n");
    out.push_str("|----|-------------|-----------|\n");
    for requirement in requirements {
        let rationale = requirement
            .rationale
            .as_deref()
            .map(escape_cell)
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            requirement.id,
            escape_cell(&requirement.description),
            rationale,
        ));
    }
    out
}

// Keep table rows on one line and literal pipes escaped.
fn escape_cell(text: &str) -> String {
    text.replace('\n', " ").replace('|', "\\|")
}
