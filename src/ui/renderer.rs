//! Rendering collaborator boundary and a terminal implementation.
//!
//! The adapter never draws; it hands a [`RowTemplate`] and per-row
//! [`RowBinding`]s to a [`RowRenderer`]. [`AnsiRenderer`] is a renderer that
//! paints rows into any `io::Write` with 24-bit ANSI colors.
//!
//! # Example
//!
//! ```rust
//! use listadapter::adapter::ListAdapter;
//! use listadapter::domain::Item;
//! use listadapter::ui::image::AssetImageLoader;
//! use listadapter::ui::renderer::{render, AnsiRenderer};
//! use listadapter::Config;
//!
//! let adapter = ListAdapter::new(vec![Item::text("Apple")], &Config::default());
//! let mut renderer = AnsiRenderer::new(Vec::new(), 40, AssetImageLoader::new("."));
//! render(&adapter, &mut renderer);
//! let output = String::from_utf8(renderer.into_inner()).unwrap();
//! assert!(output.contains("Apple"));
//! ```

use super::image::{resolve_image, ImageLoader};
use super::layout::RowLayout;
use super::theme::Theme;
use super::viewmodel::{Refresh, RowBinding, RowContent, RowTemplate};
use crate::adapter::ListAdapter;
use std::io::{self, Write};
use textwrap::{Options, WordSeparator};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the image marker column, including its trailing space.
const IMAGE_MARKER_WIDTH: usize = 6;

/// Gap between main and detail text in the linear layout.
const LINEAR_GAP: usize = 2;

/// Indentation of wrapped detail lines.
const DETAIL_INDENT: usize = 2;

/// Host side of the row contract.
pub trait RowRenderer {
    /// Prepares rows for the fixed template. Called once before binding.
    fn create_row(&mut self, template: &RowTemplate);

    /// Paints the row at displayed position `position`.
    fn bind_row(&mut self, position: usize, binding: &RowBinding);

    /// Notes rows whose bindings went stale.
    fn refresh(&mut self, refresh: &Refresh);
}

/// Creates the row template and binds every displayed row.
pub fn render(adapter: &ListAdapter, renderer: &mut dyn RowRenderer) {
    let _span = tracing::debug_span!("render", rows = adapter.count()).entered();

    renderer.create_row(adapter.row_template());
    for position in 0..adapter.count() {
        if let Some(binding) = adapter.bind_row(position) {
            renderer.bind_row(position, &binding);
        }
    }
}

/// Paints rows as colored terminal lines.
pub struct AnsiRenderer<W: Write> {
    out: W,
    cols: usize,
    template: Option<RowTemplate>,
    loader: Box<dyn ImageLoader>,
    stale: Vec<usize>,
    all_stale: bool,
    bound: usize,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, cols: usize, loader: impl ImageLoader + 'static) -> Self {
        Self {
            out,
            cols,
            template: None,
            loader: Box::new(loader),
            stale: Vec::new(),
            all_stale: false,
            bound: 0,
        }
    }

    /// Displayed positions reported stale since the last full bind.
    ///
    /// After [`Refresh::All`] this also lists every row painted in the last
    /// pass, but rows past that may be stale too; see [`Self::is_all_stale`].
    #[must_use]
    pub fn stale_rows(&self) -> &[usize] {
        &self.stale
    }

    /// Whether every row needs rebinding, set by [`Refresh::All`] and cleared
    /// by [`RowRenderer::create_row`].
    #[must_use]
    pub fn is_all_stale(&self) -> bool {
        self.all_stale
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self, binding: &RowBinding) -> io::Result<()> {
        let bg = Theme::bg(binding.background);
        let layout = self.template.as_ref().and_then(|t| t.layout.clone());

        let (Some(content), Some(layout)) = (&binding.content, layout) else {
            write!(self.out, "{bg}{}{}", " ".repeat(self.cols), Theme::reset())?;
            return writeln!(self.out);
        };

        let mut line = String::new();
        let mut used = 0;

        if layout.image_slot().is_some() {
            let drawable = resolve_image(self.loader.as_ref(), content.image());
            let marker = if drawable.is_placeholder() { "[   ] " } else { "[img] " };
            line.push_str(marker);
            used += IMAGE_MARKER_WIDTH;
        }

        let main = truncate(content.main_text(), self.cols.saturating_sub(used));
        used += main.width();
        line.push_str(&Theme::fg(layout.main_style().color));
        line.push_str(Theme::bold());
        line.push_str(&main);
        line.push_str(Theme::reset());
        line.push_str(&bg);

        let mut wrapped_detail = None;
        match (&layout, content) {
            (RowLayout::TwoTextLinear { detail, .. }, RowContent::TwoTextLinear { detail: text, .. }) => {
                let room = self.cols.saturating_sub(used + LINEAR_GAP);
                let shown = truncate(text, room);
                if !shown.is_empty() {
                    line.push_str(&" ".repeat(LINEAR_GAP));
                    line.push_str(&Theme::fg(detail.color));
                    line.push_str(&shown);
                    used += LINEAR_GAP + shown.width();
                }
            }
            (_, content) => {
                if let Some(style) = layout.detail_style() {
                    wrapped_detail = Some((style.color, content.detail_text().to_string()));
                }
            }
        }

        write!(self.out, "{bg}{line}{bg}{}{}", " ".repeat(self.cols.saturating_sub(used)), Theme::reset())?;
        writeln!(self.out)?;

        if let Some((color, text)) = wrapped_detail {
            let indent = DETAIL_INDENT + if layout.image_slot().is_some() { IMAGE_MARKER_WIDTH } else { 0 };
            let width = self.cols.saturating_sub(indent).max(1);
            for chunk in wrap_detail(&text, width) {
                write!(
                    self.out,
                    "{bg}{}{}{chunk}{}{}",
                    " ".repeat(indent),
                    Theme::fg(color),
                    " ".repeat(self.cols.saturating_sub(indent + chunk.width())),
                    Theme::reset()
                )?;
                writeln!(self.out)?;
            }
        }

        Ok(())
    }
}

impl<W: Write> RowRenderer for AnsiRenderer<W> {
    fn create_row(&mut self, template: &RowTemplate) {
        tracing::debug!(
            layout = ?template.layout.as_ref().map(RowLayout::kind),
            corner_radius = template.corner_radius,
            "row template created"
        );
        if template.layout.is_none() {
            tracing::debug!("no recognized layout, rows will carry only their background");
        }
        self.template = Some(template.clone());
        self.stale.clear();
        self.all_stale = false;
        self.bound = 0;
    }

    fn bind_row(&mut self, position: usize, binding: &RowBinding) {
        if let Err(e) = self.paint(binding) {
            tracing::warn!(position, error = %e, "failed to paint row");
        }
        self.bound = self.bound.max(position + 1);
        self.stale.retain(|&p| p != position);
    }

    fn refresh(&mut self, refresh: &Refresh) {
        match refresh {
            Refresh::Nothing => {}
            Refresh::Rows(rows) => self.stale.extend(rows),
            Refresh::All => {
                self.all_stale = true;
                self.stale.extend(0..self.bound);
            }
        }
        self.stale.sort_unstable();
        self.stale.dedup();
        tracing::trace!(?refresh, "rows marked stale");
    }
}

impl<W: Write> std::fmt::Debug for AnsiRenderer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnsiRenderer")
            .field("cols", &self.cols)
            .field("template", &self.template)
            .field("stale", &self.stale)
            .field("all_stale", &self.all_stale)
            .finish_non_exhaustive()
    }
}

/// Cuts `text` to at most `width` display columns, without an ellipsis.
///
/// A wide character that would straddle the limit is dropped.
fn truncate(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Splits `text` into lines of at most `width` display columns, breaking at
/// Unicode line break opportunities and splitting words wider than a line.
fn wrap_detail(text: &str, width: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    let options = Options::new(width).word_separator(WordSeparator::UnicodeBreakProperties);
    textwrap::wrap(text, &options)
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, Record, Result};
    use crate::ui::image::Drawable;
    use crate::ui::layout::LayoutSpec;
    use crate::Config;

    struct NoImages;

    impl ImageLoader for NoImages {
        fn load(&self, reference: &str) -> Result<Drawable> {
            Err(crate::domain::ListAdapterError::Image {
                reference: reference.to_string(),
                reason: "not found".into(),
            })
        }
    }

    struct AnyImage;

    impl ImageLoader for AnyImage {
        fn load(&self, reference: &str) -> Result<Drawable> {
            Ok(Drawable::Loaded {
                reference: reference.to_string(),
                bytes: vec![],
            })
        }
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn rendered(layout: i64, items: Vec<Item>, cols: usize, loader: impl ImageLoader + 'static) -> Vec<String> {
        let config = Config {
            layout: LayoutSpec::Code(layout),
            ..Config::default()
        };
        let adapter = ListAdapter::new(items, &config);
        let mut renderer = AnsiRenderer::new(Vec::new(), cols, loader);
        render(&adapter, &mut renderer);
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        strip_ansi(&text).lines().map(|l| l.trim_end().to_string()).collect()
    }

    #[test]
    fn single_text_is_one_line_per_row() {
        let lines = rendered(0, vec![Item::text("Apple"), Item::text("Pear")], 20, NoImages);
        assert_eq!(lines, vec!["Apple", "Pear"]);
    }

    #[test]
    fn two_text_wraps_detail_below() {
        let item = Item::Record(Record::new("Apple").with_description("a red fruit"));
        let lines = rendered(1, vec![item], 8, NoImages);
        assert_eq!(lines, vec!["Apple", "  a red", "  fruit"]);
    }

    #[test]
    fn linear_detail_is_cut_without_ellipsis() {
        let item = Item::Record(Record::new("Apple").with_description("a red fruit"));
        let lines = rendered(2, vec![item], 14, NoImages);
        assert_eq!(lines, vec!["Apple  a red f"]);
    }

    #[test]
    fn image_marker_reflects_load_result() {
        let item = Item::Record(Record::new("Kiwi").with_image("kiwi.png"));
        assert_eq!(rendered(3, vec![item.clone()], 20, NoImages), vec!["[   ] Kiwi"]);
        assert_eq!(rendered(3, vec![item], 20, AnyImage), vec!["[img] Kiwi"]);
    }

    #[test]
    fn unknown_layout_paints_blank_rows() {
        let lines = rendered(7, vec![Item::text("hidden")], 10, NoImages);
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn refresh_tracks_stale_rows_until_rebound() {
        let adapter = ListAdapter::new(vec![Item::text("a"), Item::text("b")], &Config::default());
        let mut renderer = AnsiRenderer::new(Vec::new(), 10, NoImages);
        renderer.create_row(adapter.row_template());
        renderer.refresh(&Refresh::Rows(vec![1, 0, 1]));
        assert_eq!(renderer.stale_rows(), &[0, 1]);

        renderer.bind_row(1, &adapter.bind_row(1).unwrap());
        assert_eq!(renderer.stale_rows(), &[0]);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_detail("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert!(wrap_detail("   ", 4).is_empty());
    }

    #[test]
    fn wide_characters_are_measured_in_columns() {
        assert_eq!(truncate("日本語日本語", 4), "日本");
        assert_eq!(truncate("日本語", 5), "日本");
        assert_eq!(truncate("abc", 5), "abc");

        let lines = wrap_detail("日本語日本語", 4);
        assert!(lines.iter().all(|line| line.width() <= 4), "{lines:?}");
        assert_eq!(lines.concat(), "日本語日本語");
    }

    #[test]
    fn wide_rows_stay_within_the_row_width() {
        let item = Item::Record(Record::new("日本").with_description("日本語日本語"));
        for layout in [1, 2] {
            for line in rendered(layout, vec![item.clone()], 8, NoImages) {
                assert!(line.width() <= 8, "layout {layout}: {line:?}");
            }
        }
    }

    #[test]
    fn full_refresh_keeps_every_row_stale_until_rebound() {
        let mut adapter = ListAdapter::new(vec![Item::text("a"), Item::text("b")], &Config::default());
        let mut renderer = AnsiRenderer::new(Vec::new(), 10, NoImages);
        render(&adapter, &mut renderer);
        assert!(!renderer.is_all_stale());

        renderer.refresh(&Refresh::Rows(vec![0]));
        adapter.apply_filter("b");
        renderer.refresh(&Refresh::All);
        assert!(renderer.is_all_stale());
        assert_eq!(renderer.stale_rows(), &[0, 1]);

        render(&adapter, &mut renderer);
        assert!(!renderer.is_all_stale());
        assert!(renderer.stale_rows().is_empty());
    }
}
