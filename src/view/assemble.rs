//! View-model assembly
//!
//! Resolves the worker-sourced display fields, merges in the per-section
//! reference content, and derives the document head metadata.

use url::Url;

use crate::domain::WorkerRecord;

use super::model::{PageMeta, RenderModel};
use super::reference::SectionSource;

/// Shown when neither the direct image nor the e-registration file is usable.
pub const PROFILE_PLACEHOLDER: &str = "/assets/profile-placeholder.png";

/// Build the complete render model for one page view.
pub fn assemble(worker: &WorkerRecord, source: &dyn SectionSource) -> RenderModel {
    RenderModel {
        display_name: display_name(worker),
        nationality_line: nationality_line(worker),
        image_url: resolve_image_url(worker),
        stats: source.stats(),
        profile_attributes: source.profile_attributes(),
        family_background: source.family_background(),
        education: source.education(),
        languages: source.languages(),
        cooking: source.cooking(),
        skill_cards: source.skill_cards(),
        work_history: source.work_history(),
        expectations: source.expectations(),
        caregiving: source.caregiving(),
    }
}

/// First satisfied rule wins: direct image, then e-registration file, then
/// the placeholder.
pub fn resolve_image_url(worker: &WorkerRecord) -> String {
    if let Some(image) = worker.image.as_deref() {
        if !image.is_empty() {
            return image.to_string();
        }
    }
    if let Some(detail) = &worker.worker_overseas_detail_info {
        if let Some(file) = detail.eregistration_file.as_deref() {
            return file.to_string();
        }
    }
    PROFILE_PLACEHOLDER.to_string()
}

fn display_name(worker: &WorkerRecord) -> String {
    worker
        .fullname
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or("N/A")
        .to_string()
}

/// "{id}, {localized name}"; a missing name falls back to "N/A", a missing
/// nationality drops the id entirely.
fn nationality_line(worker: &WorkerRecord) -> String {
    match &worker.nationality {
        Some(nationality) => {
            let name = nationality
                .name_in
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or("N/A");
            format!("{}, {}", nationality.id, name)
        }
        None => "N/A".to_string(),
    }
}

/// Derive head metadata from a fetched worker. The preview image must be an
/// absolute URL; a relative placeholder is absolutized against
/// `public_base_url`, and any failure there degrades to no preview rather
/// than failing the page.
pub fn page_meta(worker: &WorkerRecord, public_base_url: &str) -> PageMeta {
    let title = format!("{} — Profile", worker.fullname.as_deref().unwrap_or("Worker"));
    let description = Some(
        worker
            .about
            .clone()
            .unwrap_or_else(|| "Worker profile".to_string()),
    );

    let resolved = resolve_image_url(worker);
    let preview_image = if resolved.starts_with('/') {
        match Url::parse(public_base_url).and_then(|base| base.join(&resolved)) {
            Ok(absolute) => Some(absolute.to_string()),
            Err(e) => {
                tracing::warn!(error = %e, base = public_base_url, "could not absolutize preview image");
                None
            }
        }
    } else {
        Some(resolved)
    };

    PageMeta {
        title,
        description,
        preview_image,
    }
}
