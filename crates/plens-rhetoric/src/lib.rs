mod fragment;
mod render;
mod scan;
mod tag;

pub use fragment::{extract_fragments, fragments_for, RhetoricFragment};
pub use render::render_annotated_text;
pub use scan::{count_markup_tags, tagged_spans};
pub use tag::{Layer, RhetoricTag, UnknownTag};
