use plens_core::format::{party_class, pol_emoji, pol_label};
use plens_core::{youtube_timestamp, Intervention, Session};
use plens_query::{group_by_agenda_item, interventions_by_session, intervention_link};
use plens_rhetoric::render_annotated_text;
use plens_store::Archive;
use serde_json::json;

/// `plens session <id>`
pub fn execute(archive: &Archive, session_id: &str, json: bool) -> anyhow::Result<()> {
    let Some(session) = archive.find_session(session_id) else {
        anyhow::bail!("No annotated session with id \"{session_id}\".");
    };
    let items = interventions_by_session(archive, session_id);
    let groups = group_by_agenda_item(&items);

    if json {
        let mut idx = 0usize;
        let mut out_groups = Vec::new();
        for (title, members) in groups.iter() {
            let annotation = archive.agenda_annotation(session_id, title);
            let mut rows = Vec::new();
            for i in members {
                let anchor = format!("int-{idx}");
                idx += 1;
                rows.push(json!({
                    "anchor": anchor,
                    "link": intervention_link(session_id, &anchor),
                    "video_link": youtube_timestamp(&session.video_url, i.start_seconds),
                    "html": render_annotated_text(i.annotated().unwrap_or(&i.text)),
                    "intervention": i,
                }));
            }
            out_groups.push(json!({
                "title": title,
                "annotation": annotation,
                "interventions": rows,
            }));
        }
        let out = json!({
            "session_id": session_id,
            "session": session,
            "groups": out_groups,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_header(session, session_id);
    let mut idx = 0usize;
    for (title, members) in groups.iter() {
        println!("\n## {title}");
        if let Some(a) = archive.agenda_annotation(session_id, title) {
            if !a.agenda_summary.is_empty() {
                println!("  {}", a.agenda_summary);
            }
            for (party, position) in &a.party_positions {
                println!("  - {party}: {position}");
            }
        }
        for i in members {
            println!("{}", format_turn(idx, i));
            idx += 1;
        }
    }
    Ok(())
}

fn print_header(session: &Session, session_id: &str) {
    println!("{}", session.title);
    println!("{}  {session_id}", session.date);
    if !session.video_url.is_empty() {
        println!("Video: {}", session.video_url);
    }
    for d in &session.documents {
        println!("  doc: {} <{}>", d.name, d.url);
    }
}

/// `hh:mm:ss` for a non-negative offset in seconds.
fn fmt_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}

fn format_turn(idx: usize, i: &Intervention) -> String {
    let mut head = format!(
        "  #int-{idx} {} {} ({}, {})",
        fmt_clock(i.start_seconds),
        i.speaker_name,
        i.speaker_party,
        party_class(Some(&i.speaker_party)),
    );
    let label = pol_label(i.polarization);
    if !label.is_empty() {
        head.push_str(&format!(" {} {label}", pol_emoji(i.polarization)));
    }
    if i.is_hate_speech() {
        head.push_str(" [hate-speech]");
    }
    let text = i.text.replace('\n', " ");
    format!("{head}\n      {text}")
}
