use plens_rhetoric::render_annotated_text;
use plens_store::Archive;

/// `plens render <id>` — annotated HTML, or escaped plain text when the
/// intervention has no annotation.
pub fn execute(archive: &Archive, id: &str) -> anyhow::Result<()> {
    let Some(intervention) = archive.find_intervention(id) else {
        anyhow::bail!("No intervention with id \"{id}\".");
    };
    let source = intervention.annotated().unwrap_or(&intervention.text);
    println!("{}", render_annotated_text(source));
    Ok(())
}
