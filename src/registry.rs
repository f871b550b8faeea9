//! The tag registry: the fixed set of known element names, reduced into a
//! per-tag factory mapping.
//!
//! Two surfaces over the same set: [`tags`] holds one free function per tag
//! (`tags::div()`, `tags::button()`, …) for call sites that know the tag at
//! compile time, and [`Registry`] offers by-name lookup for call sites that
//! don't.

use std::collections::HashMap;

use crate::builder::Arg;
use crate::dom::{Document, NodeId};
use crate::error::BuildError;
use crate::factory::ElementFactory;

macro_rules! tag_registry {
    ($($tag:ident),* $(,)?) => {
        /// The fixed, enumerated set of known tag names.
        pub const TAG_NAMES: &[&str] = &[$(stringify!($tag)),*];

        /// One factory function per known tag.
        pub mod tags {
            use crate::factory::ElementFactory;

            $(
                #[doc = concat!("Factory for the `<", stringify!($tag), ">` element.")]
                pub fn $tag() -> ElementFactory {
                    ElementFactory::new(stringify!($tag))
                }
            )*
        }
    };
}

tag_registry! {
    a, abbr, address, area, article, aside, audio,
    b, base, bdi, bdo, blockquote, body, br, button,
    canvas, caption, cite, code, col, colgroup,
    data, datalist, dd, del, details, dfn, dialog, div, dl, dt,
    em, embed,
    fieldset, figcaption, figure, footer, form,
    h1, h2, h3, h4, h5, h6, head, header, hgroup, hr, html,
    i, iframe, img, input, ins,
    kbd,
    label, legend, li, link,
    main, map, mark, menu, meta, meter,
    nav, noscript,
    object, ol, optgroup, option, output,
    p, param, picture, pre, progress,
    q,
    rp, rt, ruby,
    s, samp, script, search, section, select, slot, small, source, span,
    strong, style, sub, summary, sup,
    table, tbody, td, template, textarea, tfoot, th, thead, time, title,
    tr, track,
    u, ul,
    var, video,
    wbr,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Mapping from tag name to its [`ElementFactory`].
#[derive(Debug)]
pub struct Registry {
    factories: HashMap<&'static str, ElementFactory>,
}

impl Registry {
    /// Build the registry of all known tags by reducing [`TAG_NAMES`].
    pub fn standard() -> Self {
        let factories = TAG_NAMES
            .iter()
            .map(|&tag| (tag, ElementFactory::new(tag)))
            .collect();
        Self { factories }
    }

    /// Look up the factory for a tag name.
    pub fn get(&self, tag: &str) -> Option<&ElementFactory> {
        self.factories.get(tag)
    }

    /// Whether a tag name is known.
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Number of known tags.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Iterate over the name→factory pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ElementFactory)> {
        self.factories.iter().map(|(&tag, factory)| (tag, factory))
    }

    /// Build an element by tag name from two loose positional arguments.
    ///
    /// Delegates to the tag's [`ElementFactory::call`]. An unknown tag is
    /// reported (and logged) as [`BuildError::UnknownTag`].
    pub fn call(
        &self,
        doc: &mut Document,
        tag: &str,
        first: Option<Arg>,
        second: Option<Arg>,
    ) -> Result<NodeId, BuildError> {
        let factory = self.get(tag).ok_or_else(|| {
            let err = BuildError::UnknownTag(tag.to_owned());
            log::error!("element construction failed: {err}");
            err
        })?;
        factory.call(doc, first, second)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
