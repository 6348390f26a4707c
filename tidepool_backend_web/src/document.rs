// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level metadata and reveal presentation.
//!
//! [`DomMetadataSink`] is the single place document state mutates: title,
//! description, canonical link, theme-color, and the root `data-theme`
//! attribute all flow through [`apply`](tidepool_core::backend::MetadataSink::apply)
//! with a [`PageMetadata`] object. [`DomRevealPresenter`] maps [`LinkId`]s to
//! live elements and marks revealed links with the [`VISIBLE_CLASS`] class.
//!
//! [`PageMetadata`]: tidepool_core::metadata::PageMetadata
//! [`LinkId`]: tidepool_core::link::LinkId

use alloc::vec::Vec;

use web_sys::{Document, Element, HtmlElement};

use tidepool_core::backend::{MetadataSink, RevealPresenter};
use tidepool_core::link::LinkId;
use tidepool_core::metadata::PageMetadata;
use tidepool_core::reveal::RevealChanges;

/// Class added to a link element when it becomes visible.
pub const VISIBLE_CLASS: &str = "visible";

/// Applies [`PageMetadata`] to a live document.
pub struct DomMetadataSink {
    document: Document,
}

impl core::fmt::Debug for DomMetadataSink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomMetadataSink")
            .field("document", &"Document")
            .finish()
    }
}

impl DomMetadataSink {
    /// Creates a sink over `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Finds the head element matching `selector`, creating it as a `tag`
    /// element with one identifying attribute when absent.
    fn upsert_head(&self, selector: &str, tag: &str, attr: (&str, &str)) -> Option<Element> {
        if let Ok(Some(el)) = self.document.query_selector(selector) {
            return Some(el);
        }
        let el = self.document.create_element(tag).ok()?;
        let _ = el.set_attribute(attr.0, attr.1);
        let head = self.document.head()?;
        let _ = head.append_child(&el);
        Some(el)
    }
}

impl MetadataSink for DomMetadataSink {
    fn apply(&mut self, metadata: &PageMetadata) {
        self.document.set_title(metadata.title);

        if let Some(el) =
            self.upsert_head("meta[name=\"description\"]", "meta", ("name", "description"))
        {
            let _ = el.set_attribute("content", metadata.description);
        }

        if let Some(el) =
            self.upsert_head("meta[name=\"theme-color\"]", "meta", ("name", "theme-color"))
        {
            let _ = el.set_attribute("content", metadata.theme_color);
        }

        // Canonical URL comes from the live document, not the metadata
        // object; created if absent, else updated.
        if let Some(el) = self.upsert_head("link[rel=\"canonical\"]", "link", ("rel", "canonical"))
            && let Ok(url) = self.document.url()
        {
            let _ = el.set_attribute("href", &url);
        }

        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("data-theme", metadata.theme.as_str());
        }
    }
}

/// Maps [`LinkId`]s to live link elements and applies reveal transitions.
///
/// [`LinkId`]: tidepool_core::link::LinkId
#[derive(Default)]
pub struct DomRevealPresenter {
    elements: Vec<Option<HtmlElement>>,
}

impl core::fmt::Debug for DomRevealPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomRevealPresenter")
            .field("elements_len", &self.elements.len())
            .finish()
    }
}

impl DomRevealPresenter {
    /// Creates a presenter with no registered elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the element presenting `link`, growing the slot table if
    /// needed.
    pub fn register(&mut self, link: LinkId, el: HtmlElement) {
        let slot = link.index() as usize;
        if self.elements.len() <= slot {
            self.elements.resize_with(slot + 1, || None);
        }
        self.elements[slot] = Some(el);
    }

    /// Returns the element for `link`, if registered.
    #[must_use]
    pub fn get_element(&self, link: LinkId) -> Option<&HtmlElement> {
        self.elements
            .get(link.index() as usize)
            .and_then(|slot| slot.as_ref())
    }
}

impl RevealPresenter for DomRevealPresenter {
    fn apply(&mut self, changes: &RevealChanges) {
        for &link in &changes.revealed {
            if let Some(el) = self.get_element(link) {
                let _ = el.class_list().add_1(VISIBLE_CLASS);
            }
        }
    }
}
