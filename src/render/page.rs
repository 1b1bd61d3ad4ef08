//! Profile page renderer
//!
//! Pure mapping from the render model to the final document, one section at a
//! time in fixed order. The error page is the only alternative output; a
//! failed fetch never produces partial profile markup.

use crate::view::model::{
    Attribute, CaregivingCategory, EducationEntry, Expectation, ExpectationStatus, InfoCard,
    PageMeta, RenderModel, Stat, WorkExperience,
};

use super::html::{esc, HtmlBuilder};
use super::panel::{render_panel, Panel};

const STYLES: &str = r#"
:root { --secondary: #9B9B9B; --border: #EAEAEA; --accent: #009AFA; }
* { box-sizing: border-box; }
body { margin: 0 auto; max-width: 30rem; font-family: system-ui, -apple-system, sans-serif; color: #111; background: #fff; }
h1 { color: var(--secondary); font-size: 1.25rem; font-weight: 400; margin: 0 0 1rem; }
.banner { height: 11.25rem; }
.banner-image { width: 100%; height: 100%; object-fit: cover; }
.avatar-ring { width: 8.125rem; height: 8.125rem; margin: -6.5rem auto 0; position: relative; border: 1px solid var(--border); border-radius: 50%; background: #fff; }
.avatar { width: 100%; height: 100%; padding: 0.375rem; border-radius: 50%; object-fit: cover; }
.identity { margin-top: 2.5rem; padding: 0 2rem; text-align: center; }
.display-name { margin: 0; font-size: 1.75rem; line-height: 1.2; }
.nationality { margin: 0; color: var(--secondary); font-size: 1rem; overflow-wrap: break-word; }
.stats { display: flex; justify-content: center; gap: 1.5rem; margin-top: 1.75rem; padding: 0 1.25rem; }
.stat { flex: 1; display: flex; flex-direction: column; align-items: center; text-align: center; }
.stat img { width: 2.25rem; height: 2.25rem; }
.stat-label { margin: 0.625rem 0 0; color: var(--secondary); font-size: 0.875rem; }
.stat-value { margin: 0; font-size: 1rem; }
.divider { margin: 1.25rem; border-bottom: 1px dashed var(--border); }
.section { padding: 0 2rem; margin-top: 2.5rem; }
.attr-row { display: flex; flex-wrap: wrap; margin-bottom: 1.25rem; }
.attr { flex: 1; }
.attr-label, .care-heading, .detail-label { margin: 0 0 0.25rem; color: var(--secondary); font-size: 0.625rem; font-weight: 500; }
.attr-value, .detail-value { margin: 0; line-height: 1rem; }
.edu-entry { display: flex; align-items: flex-start; gap: 0.625rem; margin-top: 1rem; overflow-wrap: break-word; }
.edu-entry img { width: 2rem; height: 2rem; object-fit: contain; flex-shrink: 0; }
.card-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.625rem; grid-auto-rows: 1fr; }
.info-card { display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 0.5rem 0.625rem 0.375rem; border: 1px solid rgba(0, 0, 0, 0.05); border-radius: 10px; background: #fff; box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.06); text-align: center; }
.info-card img { height: 2.625rem; }
.card-title { margin: 0; font-size: 0.75rem; }
.card-subtitle { margin: 0; color: var(--secondary); font-size: 0.625rem; font-weight: 700; letter-spacing: 0.33px; }
.experience { display: flex; align-items: flex-start; gap: 0.625rem; margin-bottom: 2.5rem; }
.experience > img { width: 2rem; height: 2rem; object-fit: contain; flex-shrink: 0; }
.experience-heading { font-weight: 500; overflow-wrap: break-word; }
.experience-heading p { margin: 0; }
.experience-period { color: var(--secondary); }
.detail-grid { display: flex; gap: 1.25rem; margin-top: 1.5rem; }
.detail-col { flex: 1; }
.detail { margin-bottom: 1.25rem; }
.badges { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.25rem; }
.badge { display: inline-flex; align-items: center; gap: 0.625rem; padding: 0.375rem 1.25rem 0.375rem 0.875rem; border: 1px solid var(--border); border-radius: 9999px; background: #fff; }
.badge img { width: 1.5rem; height: 1.5rem; }
.badge.badge-lg img { width: auto; height: 1.875rem; }
.badge p { margin: 0; }
.badge-age { color: var(--secondary); font-size: 0.625rem; font-weight: 700; }
.expectation { display: flex; align-items: center; justify-content: space-between; margin-bottom: 0.5rem; }
.expectation p { margin: 0; }
.expectation img { width: 1.5rem; height: 1.5rem; }
.panels { margin-top: 1rem; }
.panel { border-bottom: 1px dashed var(--border); overflow: hidden; padding-bottom: 0.75rem; margin-bottom: 1rem; }
.panel:last-child { border-bottom: 0; }
.panel-toggle { display: flex; align-items: center; justify-content: space-between; width: 100%; padding: 0; border: 0; background: none; text-align: left; cursor: pointer; font: inherit; }
.panel-title { font-weight: 700; }
.chevron { width: 1.5rem; height: 1.5rem; transition: transform 0.3s ease-in-out; }
.chevron.rotated { transform: rotate(180deg); }
.panel-body { overflow: hidden; transition: height 0.3s ease-in-out, opacity 0.3s ease-in-out; }
.caregiving { padding-top: 0.75rem; }
.care-block { margin-bottom: 0.75rem; }
.care-heading { font-weight: 700; letter-spacing: 0.33px; line-height: 1.25rem; padding-bottom: 0.25rem; }
.care-block ul { margin: 0; padding-left: 1.25rem; line-height: 1.5rem; }
.reference-note { margin-top: 1.25rem; }
.cta { padding: 0 2rem; margin: 2.5rem 0; }
.cta-button { display: flex; align-items: center; justify-content: center; gap: 0.5rem; width: 100%; padding: 0.75rem 1.5rem; border: 0; border-radius: 9999px; background: var(--accent); color: #fff; font-weight: 500; cursor: pointer; }
.cta-button img { height: 1rem; }
.error-screen { height: 100vh; display: flex; align-items: center; justify-content: center; }
.error-notice { color: #ef4444; text-align: center; }
"#;

// Replays the Panel transition contract in the browser: height/opacity over
// 300ms ease-in-out, body out of layout while closed, smooth scroll to the
// panel top once the open transition settles.
const PANEL_SCRIPT: &str = r#"
document.querySelectorAll("[data-panel]").forEach((panel) => {
  const toggle = panel.querySelector("[data-panel-toggle]");
  const body = panel.querySelector("[data-panel-body]");
  const chevron = panel.querySelector("[data-panel-chevron]");
  if (!toggle || !body) return;

  toggle.addEventListener("click", () => {
    const open = toggle.getAttribute("aria-expanded") === "true";
    toggle.setAttribute("aria-expanded", String(!open));
    if (chevron) chevron.classList.toggle("rotated", open);

    if (open) {
      body.style.height = body.scrollHeight + "px";
      requestAnimationFrame(() => {
        body.style.height = "0px";
        body.style.opacity = "0";
      });
      body.addEventListener("transitionend", () => {
        body.hidden = true;
      }, { once: true });
    } else {
      body.hidden = false;
      body.style.height = "0px";
      body.style.opacity = "0";
      requestAnimationFrame(() => {
        body.style.height = body.scrollHeight + "px";
        body.style.opacity = "1";
      });
      body.addEventListener("transitionend", () => {
        body.style.height = "";
        panel.scrollIntoView({ behavior: "smooth", block: "start" });
      }, { once: true });
    }
  });
});
"#;

/// Render the full profile document for one worker.
pub fn profile_page(model: &RenderModel, meta: &PageMeta) -> String {
    let mut html = HtmlBuilder::new();
    head(&mut html, meta, Some(&model.image_url));
    html.raw("<body><main>");

    banner(&mut html, model);
    identity(&mut html, model);
    stat_strip(&mut html, &model.stats);
    html.raw("<div class=\"divider\"></div>");
    attribute_grid(&mut html, "Profile", &model.profile_attributes);
    attribute_grid(&mut html, "Family Background", &model.family_background);
    education(&mut html, &model.education);
    text_section(&mut html, "Language", &model.languages);
    skills(&mut html, &model.skill_cards);
    text_section(&mut html, "Cooking", &model.cooking);
    work_history(&mut html, &model.work_history);
    expectations(&mut html, &model.expectations);
    expanded_profile(&mut html, &model.caregiving);
    cta(&mut html);

    html.raw("</main><script>").raw(PANEL_SCRIPT).raw("</script></body></html>");
    html.finish()
}

/// The single centered notice shown when the worker could not be loaded.
/// None of the profile sections are rendered around it.
pub fn error_page() -> String {
    let mut html = HtmlBuilder::new();
    head(&mut html, &PageMeta::fallback(), None);
    html.raw("<body><main class=\"error-screen\">");
    html.raw("<p class=\"error-notice\">Failed to load worker data.</p>");
    html.raw("</main></body></html>");
    html.finish()
}

fn head(html: &mut HtmlBuilder, meta: &PageMeta, favicon: Option<&str>) {
    html.raw("<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.raw("<title>").text(&meta.title).raw("</title>");
    if let Some(description) = &meta.description {
        html.raw(&format!(
            "<meta name=\"description\" content=\"{}\">",
            esc(description)
        ));
    }
    html.raw(&format!(
        "<meta property=\"og:title\" content=\"{}\">",
        esc(&meta.title)
    ));
    if let Some(image) = &meta.preview_image {
        html.raw(&format!(
            "<meta property=\"og:image\" content=\"{}\">",
            esc(image)
        ));
    }
    if let Some(favicon) = favicon {
        html.raw(&format!(
            "<link rel=\"icon\" href=\"{}\" type=\"image/png\" sizes=\"32x32\">",
            esc(favicon)
        ));
    }
    html.raw("<style>").raw(STYLES).raw("</style></head>");
}

fn banner(html: &mut HtmlBuilder, model: &RenderModel) {
    html.raw("<div class=\"banner\">");
    html.raw("<img class=\"banner-image\" src=\"/assets/profile-banner.png\" alt=\"\">");
    html.raw(&format!(
        "<div class=\"avatar-ring\"><img class=\"avatar\" src=\"{}\" alt=\"{} avatar\"></div>",
        esc(&model.image_url),
        esc(&model.display_name),
    ));
    html.raw("</div>");
}

fn identity(html: &mut HtmlBuilder, model: &RenderModel) {
    html.raw("<section class=\"identity\">");
    html.raw("<p class=\"display-name\">")
        .text(&model.display_name)
        .raw("</p>");
    html.raw("<p class=\"nationality\">")
        .text(&model.nationality_line)
        .raw("</p>");
    html.raw("</section>");
}

fn stat_strip(html: &mut HtmlBuilder, stats: &[Stat]) {
    html.raw("<section class=\"stats\">");
    for stat in stats {
        html.raw("<div class=\"stat\">");
        html.raw(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            esc(&stat.icon),
            esc(&stat.label)
        ));
        html.raw("<p class=\"stat-label\">").text(&stat.label).raw("</p>");
        html.raw("<p class=\"stat-value\">").text(&stat.value).raw("</p>");
        html.raw("</div>");
    }
    html.raw("</section>");
}

fn attribute_grid(html: &mut HtmlBuilder, title: &str, attributes: &[Attribute]) {
    html.raw("<section class=\"section\"><h1>")
        .text(title)
        .raw("</h1>");
    for pair in attributes.chunks(2) {
        html.raw("<div class=\"attr-row\">");
        for attribute in pair {
            html.raw("<div class=\"attr\">");
            html.raw("<p class=\"attr-label\">").text(&attribute.label).raw("</p>");
            html.raw("<p class=\"attr-value\">").text(&attribute.value).raw("</p>");
            html.raw("</div>");
        }
        html.raw("</div>");
    }
    html.raw("</section>");
}

fn education(html: &mut HtmlBuilder, entries: &[EducationEntry]) {
    html.raw("<section class=\"section\"><h1>Education</h1>");
    for entry in entries {
        html.raw("<div class=\"edu-entry\">");
        html.raw(&format!(
            "<img src=\"{}\" alt=\"Education\">",
            esc(&entry.icon)
        ));
        html.raw("<div>");
        html.raw("<p class=\"attr-label\">").text(&entry.label).raw("</p>");
        html.raw("<p class=\"attr-value\">").text(&entry.value).raw("</p>");
        html.raw("</div></div>");
    }
    html.raw("</section>");
}

fn text_section(html: &mut HtmlBuilder, title: &str, body: &str) {
    html.raw("<section class=\"section\"><h1>")
        .text(title)
        .raw("</h1><div>")
        .text(body)
        .raw("</div></section>");
}

fn skills(html: &mut HtmlBuilder, cards: &[InfoCard]) {
    html.raw("<section class=\"section\"><h1>Main Skills</h1><div class=\"card-grid\">");
    for card in cards {
        html.raw("<div class=\"info-card\">");
        html.raw(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            esc(&card.icon),
            esc(&card.title)
        ));
        html.raw("<p class=\"card-title\">").text(&card.title).raw("</p>");
        if let Some(subtitle) = &card.subtitle {
            html.raw("<p class=\"card-subtitle\">").text(subtitle).raw("</p>");
        }
        html.raw("</div>");
    }
    html.raw("</div></section>");
}

fn work_history(html: &mut HtmlBuilder, experiences: &[WorkExperience]) {
    html.raw("<section class=\"section\"><h1>Work Experience</h1>");
    for experience in experiences {
        html.raw("<div class=\"experience\">");
        html.raw(&format!(
            "<img src=\"{}\" alt=\"Experience\">",
            esc(&experience.icon)
        ));
        html.raw("<div>");

        html.raw("<div class=\"experience-heading\"><p>");
        html.text(&format!("{}, {}", experience.position, experience.location));
        html.raw("</p><p class=\"experience-period\">");
        html.text(&format!(
            "{} - {}",
            experience.period.start, experience.period.end
        ));
        html.raw("</p></div>");

        let details = &experience.details;
        html.raw("<div class=\"detail-grid\"><div class=\"detail-col\">");
        detail(html, "EMPLOYER NATIONALITY", &details.employer_nationality);
        detail(html, "DISTRICT", &details.district);
        html.raw("</div><div class=\"detail-col\">");
        detail(html, "SIZE OF HOME", &details.size_of_home);
        detail(html, "HOUSEHOLD SIZE", &details.household_size.to_string());
        html.raw("</div></div>");
        detail(html, "LANGUAGE SPOKEN", &details.language_spoken);
        detail(html, "REASON FOR LEAVING", &details.reason_for_leaving);

        html.raw("<p class=\"detail-label\">MAIN DUTIES</p><div class=\"badges\">");
        for (index, duty) in experience.main_duties.iter().enumerate() {
            let class = if index == 0 { "badge badge-lg" } else { "badge" };
            html.raw(&format!("<span class=\"{class}\">"));
            html.raw(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                esc(&duty.icon),
                esc(&duty.name)
            ));
            html.raw("<p>").text(&duty.name).raw("</p>");
            if let Some(age_range) = &duty.age_range {
                html.raw("<p class=\"badge-age\">")
                    .text(&format!("AGE {age_range}"))
                    .raw("</p>");
            }
            html.raw("</span>");
        }
        html.raw("</div>");

        html.raw("</div></div>");
    }
    html.raw("</section>");
}

fn detail(html: &mut HtmlBuilder, label: &str, value: &str) {
    html.raw("<div class=\"detail\">");
    html.raw("<p class=\"detail-label\">").text(label).raw("</p>");
    html.raw("<p class=\"detail-value\">").text(value).raw("</p>");
    html.raw("</div>");
}

fn expectations(html: &mut HtmlBuilder, expectations: &[Expectation]) {
    html.raw("<section class=\"section\"><h1>Expectations</h1>");
    for expectation in expectations {
        html.raw("<div class=\"expectation\"><p>")
            .text(&expectation.label)
            .raw("</p>");
        match expectation.status {
            ExpectationStatus::Satisfied => {
                html.raw("<img src=\"/assets/icons/check.png\" alt=\"Check Mark\">");
            }
            ExpectationStatus::Unsatisfied => {
                html.raw("<img src=\"/assets/icons/cross.png\" alt=\"Cross Mark\">");
            }
        }
        html.raw("</div>");
    }
    html.raw("</section>");
}

fn expanded_profile(html: &mut HtmlBuilder, categories: &[CaregivingCategory]) {
    html.raw("<section class=\"section\"><h1>Expanded Profile</h1><div class=\"panels\">");
    for category in categories {
        let panel = Panel::new(category.category.clone());
        let body = caregiving_body(category);
        render_panel(html, &panel, &body);
    }
    html.raw("</div><p class=\"reference-note\">Reference Letter Available</p></section>");
}

/// Panel body for one caregiving category. Either block is omitted when its
/// list is empty; both empty leaves the body without content blocks.
fn caregiving_body(category: &CaregivingCategory) -> String {
    let mut html = HtmlBuilder::new();
    html.raw("<div class=\"caregiving\">");
    care_block(&mut html, "HAS CARED FOR", &category.has_cared_for);
    care_block(&mut html, "EXPERIENCED IN", &category.experienced_in);
    html.raw("</div>");
    html.finish()
}

fn care_block(html: &mut HtmlBuilder, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    html.raw("<div class=\"care-block\">");
    html.raw("<p class=\"care-heading\">").text(heading).raw("</p><ul>");
    for item in items {
        html.raw("<li>").text(item).raw("</li>");
    }
    html.raw("</ul></div>");
}

fn cta(html: &mut HtmlBuilder) {
    html.raw("<div class=\"cta\"><button type=\"button\" class=\"cta-button\">");
    html.raw("<img src=\"/assets/icons/star.png\" alt=\"Star\">");
    html.raw("I'm Interested</button></div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate;
    use crate::view::{assemble, page_meta, DemoContent};
    use serde_json::json;

    fn model_for(payload: serde_json::Value) -> RenderModel {
        let worker = validate(&payload).unwrap();
        assemble(&worker, &DemoContent)
    }

    fn category(has_cared_for: &[&str], experienced_in: &[&str]) -> CaregivingCategory {
        CaregivingCategory {
            category: "Test".to_string(),
            has_cared_for: has_cared_for.iter().map(|s| s.to_string()).collect(),
            experienced_in: experienced_in.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn renders_identity_and_avatar() {
        let worker = validate(&json!({
            "id": 42,
            "user_id": 7,
            "fullname": "Maria Santos",
            "nationality": { "id": 1, "name_in": "Filipino" },
            "image": null,
            "worker_overseas_detail_info": {
                "worker_id": 42,
                "eregistration_file": "https://cdn.example/x.png"
            }
        }))
        .unwrap();
        let model = assemble(&worker, &DemoContent);
        let meta = page_meta(&worker, "http://localhost:8080");
        let page = profile_page(&model, &meta);

        assert!(page.contains("Maria Santos"));
        assert!(page.contains("1, Filipino"));
        assert!(page.contains("src=\"https://cdn.example/x.png\""));
        assert!(page.contains("<title>Maria Santos — Profile</title>"));
    }

    #[test]
    fn renders_every_section_even_with_minimal_worker() {
        let model = model_for(json!({ "id": 1, "user_id": 2 }));
        let page = profile_page(&model, &PageMeta::fallback());
        for heading in [
            "Profile",
            "Family Background",
            "Education",
            "Language",
            "Main Skills",
            "Cooking",
            "Work Experience",
            "Expectations",
            "Expanded Profile",
        ] {
            assert!(page.contains(heading), "missing section: {heading}");
        }
        assert!(page.contains("N/A"));
        assert!(page.contains("Reference Letter Available"));
        assert!(page.contains("I'm Interested"));
    }

    #[test]
    fn escapes_hostile_worker_fields() {
        let model = model_for(json!({
            "id": 1,
            "user_id": 2,
            "fullname": "<script>alert(1)</script>"
        }));
        let page = profile_page(&model, &PageMeta::fallback());
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn first_duty_badge_is_large() {
        let model = model_for(json!({ "id": 1, "user_id": 2 }));
        let page = profile_page(&model, &PageMeta::fallback());
        let first_badges = page.find("badge badge-lg").unwrap();
        let plain_badge = page.find("<span class=\"badge\">").unwrap();
        assert!(first_badges < plain_badge);
    }

    #[test]
    fn caregiving_blocks_follow_emptiness_rules() {
        let both = caregiving_body(&category(&["75 yr old"], &["Meal preparation"]));
        assert!(both.contains("HAS CARED FOR"));
        assert!(both.contains("EXPERIENCED IN"));

        let experienced_only = caregiving_body(&category(&[], &["General cleaning"]));
        assert!(!experienced_only.contains("HAS CARED FOR"));
        assert!(experienced_only.contains("EXPERIENCED IN"));

        let cared_only = caregiving_body(&category(&["Newborn (0-1 year)"], &[]));
        assert!(cared_only.contains("HAS CARED FOR"));
        assert!(!cared_only.contains("EXPERIENCED IN"));

        let neither = caregiving_body(&category(&[], &[]));
        assert!(!neither.contains("care-block"));
    }

    #[test]
    fn expectation_glyphs_follow_status() {
        let model = model_for(json!({ "id": 1, "user_id": 2 }));
        let page = profile_page(&model, &PageMeta::fallback());
        assert!(page.contains("/assets/icons/check.png"));
        assert!(page.contains("/assets/icons/cross.png"));
    }

    #[test]
    fn error_page_has_notice_and_no_sections() {
        let page = error_page();
        assert!(page.contains("Failed to load worker data."));
        assert!(page.contains("error-notice"));
        for heading in ["Expanded Profile", "Expectations", "Work Experience"] {
            assert!(!page.contains(heading));
        }
    }
}
