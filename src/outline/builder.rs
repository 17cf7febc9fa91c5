use crate::dom::Selector;
use crate::error::Result;
use crate::outline::config::{OptOutPolicy, OutlineOptions};
use crate::outline::entry::OutlineEntry;
use crate::outline::identifier::generate_id;
use crate::outline::report::OutlineOutcome;
use crate::outline::selectors;
use crate::surface::RenderingSurface;

/// An outline is only built with more headings than this
pub const HEADING_THRESHOLD: usize = 4;

/// Builds the post outline on a rendering surface
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    options: OutlineOptions,
}

impl OutlineBuilder {
    pub fn new(options: OutlineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Tag every post heading with an identifier and list it in the outline.
    ///
    /// Pages without a container, pages carrying the opt-out marker (when honored) and pages
    /// with too few headings are left untouched. Entries are only ever appended, so running
    /// this twice on one page lists every heading twice.
    pub fn build<S: RenderingSurface>(&self, surface: &mut S) -> Result<OutlineOutcome> {
        let containers = surface.query_all(&Selector::parse(selectors::OUTLINE_CONTAINER)?)?;
        if containers.is_empty() {
            log::debug!("No outline container, skipping outline");
            return Ok(OutlineOutcome::MissingContainer);
        }

        if self.options.opt_out == OptOutPolicy::Honor
            && surface.exists(&Selector::parse(selectors::NO_OUTLINE_MARKER)?)?
        {
            log::debug!("Page opted out of the outline");
            return Ok(OutlineOutcome::OptedOut);
        }

        let headings = surface.query_all(&Selector::parse(selectors::POST_HEADINGS)?)?;
        if headings.len() <= HEADING_THRESHOLD {
            log::debug!(
                "Only {} headings (need more than {}), skipping outline",
                headings.len(),
                HEADING_THRESHOLD
            );
            return Ok(OutlineOutcome::TooFewHeadings {
                count: headings.len(),
            });
        }

        let lists = surface.query_all(&Selector::parse(selectors::OUTLINE_LIST)?)?;
        let mut entries = Vec::with_capacity(headings.len());

        for heading in &headings {
            let title = surface.inner_html(heading)?;
            let target_id = generate_id(&title);
            surface.set_attribute(heading, "id", &target_id)?;
            log::debug!("Heading {:?} -> #{}", heading, target_id);

            let entry = OutlineEntry::new(title, target_id);
            for list in &lists {
                surface.append_child(list, entry.to_list_item())?;
            }
            entries.push(entry);
        }

        for container in &containers {
            surface.set_visible(container, true)?;
        }

        log::info!("Outline built with {} entries", entries.len());
        Ok(OutlineOutcome::Built { entries })
    }
}
