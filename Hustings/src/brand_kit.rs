//! Brand kit aggregate: logos, colors, fonts, and photos
//!
//! The brand kit persists as a single JSON aggregate inside the candidate
//! profile. Each section is `Option<Vec<_>>`: `None` means the workspace has
//! never touched the section and the fixed default set is substituted at
//! read time; `Some(vec![])` means the user emptied it on purpose. The first
//! mutation of an untouched section materializes the defaults into the
//! aggregate so they survive the write.

use serde::{Deserialize, Serialize};

/// A named palette color. `hex` is '#'-prefixed, six digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorItem {
    pub id: u32,
    pub name: String,
    pub hex: String,
}

/// What a logo or photo slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    /// Built-in light-background logo placeholder.
    DefaultLight,
    /// Built-in dark-background logo placeholder.
    DefaultDark,
    /// A file the user uploaded; carries `url` and `name`.
    Upload,
    /// Built-in photo placeholder.
    DefaultPhoto,
}

/// One logo or photo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandAsset {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BrandAsset {
    /// An uploaded asset backed by a stored file.
    #[must_use]
    pub fn upload(id: impl Into<String>, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: AssetKind::Upload,
            url: Some(url.into()),
            name: Some(name.into()),
        }
    }

    fn placeholder(id: &str, kind: AssetKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            url: None,
            name: None,
        }
    }
}

/// A named typography slot (Title, Body, Caption, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontStyle {
    pub id: String,
    pub name: String,
    pub font_family: String,
    pub size: u32,
    pub weight: String,
    pub style: String,
}

/// The persisted brand kit aggregate. Always written whole; sections are
/// never updated independently in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandKit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logos: Option<Vec<BrandAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<ColorItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Vec<FontStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<BrandAsset>>,
}

/// Default palette shown before a workspace saves its own colors.
#[must_use]
pub fn default_colors() -> Vec<ColorItem> {
    vec![
        color(1, "Navy Blue", "#0F172A"),
        color(2, "Action Blue", "#2563EB"),
        color(3, "Accent Red", "#DC2626"),
        color(4, "White", "#FFFFFF"),
    ]
}

/// Default logo placeholders (one light, one dark).
#[must_use]
pub fn default_logos() -> Vec<BrandAsset> {
    vec![
        BrandAsset::placeholder("def-1", AssetKind::DefaultLight),
        BrandAsset::placeholder("def-2", AssetKind::DefaultDark),
    ]
}

/// Default photo placeholders.
#[must_use]
pub fn default_photos() -> Vec<BrandAsset> {
    vec![
        BrandAsset::placeholder("p-1", AssetKind::DefaultPhoto),
        BrandAsset::placeholder("p-2", AssetKind::DefaultPhoto),
    ]
}

/// Default typography slots, ids "1" through "8".
#[must_use]
pub fn default_fonts() -> Vec<FontStyle> {
    vec![
        font("1", "Title", "Gill Sans", 48, "Bold", "normal"),
        font("2", "Subtitle", "Inter", 24, "Regular", "normal"),
        font("3", "Heading", "Playfair Display", 36, "Bold", "normal"),
        font("4", "Subheading", "Inter", 20, "Medium", "normal"),
        font("5", "Section header", "Inter", 16, "Bold", "uppercase"),
        font("6", "Body", "Inter", 16, "Regular", "normal"),
        font("7", "Quote", "Playfair Display", 28, "Regular", "italic"),
        font("8", "Caption", "Inter", 12, "Regular", "normal"),
    ]
}

fn color(id: u32, name: &str, hex: &str) -> ColorItem {
    ColorItem {
        id,
        name: name.to_string(),
        hex: hex.to_string(),
    }
}

fn font(id: &str, name: &str, family: &str, size: u32, weight: &str, style: &str) -> FontStyle {
    FontStyle {
        id: id.to_string(),
        name: name.to_string(),
        font_family: family.to_string(),
        size,
        weight: weight.to_string(),
        style: style.to_string(),
    }
}

impl BrandKit {
    // ==================== Resolved views ====================

    /// The palette as displayed: stored colors, or the defaults when the
    /// section has never been written.
    #[must_use]
    pub fn colors(&self) -> Vec<ColorItem> {
        self.colors.clone().unwrap_or_else(default_colors)
    }

    /// The logo list as displayed.
    #[must_use]
    pub fn logos(&self) -> Vec<BrandAsset> {
        self.logos.clone().unwrap_or_else(default_logos)
    }

    /// The typography slots as displayed.
    #[must_use]
    pub fn fonts(&self) -> Vec<FontStyle> {
        self.fonts.clone().unwrap_or_else(default_fonts)
    }

    /// The photo list as displayed.
    #[must_use]
    pub fn photos(&self) -> Vec<BrandAsset> {
        self.photos.clone().unwrap_or_else(default_photos)
    }

    // ==================== Section writes ====================
    //
    // Every mutation goes through one of these, so the first touch of a
    // `None` section stores the resolved defaults alongside the change.

    /// Replace the color section wholesale.
    pub fn set_colors(&mut self, colors: Vec<ColorItem>) {
        self.colors = Some(colors);
    }

    /// Replace the logo section wholesale.
    pub fn set_logos(&mut self, logos: Vec<BrandAsset>) {
        self.logos = Some(logos);
    }

    /// Replace the font section wholesale.
    pub fn set_fonts(&mut self, fonts: Vec<FontStyle>) {
        self.fonts = Some(fonts);
    }

    /// Replace the photo section wholesale.
    pub fn set_photos(&mut self, photos: Vec<BrandAsset>) {
        self.photos = Some(photos);
    }

    // ==================== Colors ====================

    /// Next free palette id: `max + 1`, or 1 for an empty palette.
    #[must_use]
    pub fn next_color_id(&self) -> u32 {
        self.colors()
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Append a color to the palette.
    pub fn add_color(&mut self, item: ColorItem) {
        let mut colors = self.colors();
        colors.push(item);
        self.set_colors(colors);
    }

    /// Replace the palette entry with the same id. Unknown ids leave the
    /// palette unchanged (apart from materialization).
    pub fn update_color(&mut self, item: &ColorItem) {
        let colors = self
            .colors()
            .into_iter()
            .map(|c| if c.id == item.id { item.clone() } else { c })
            .collect();
        self.set_colors(colors);
    }

    /// Remove the palette entry with the given id, if present.
    pub fn delete_color(&mut self, id: u32) {
        let mut colors = self.colors();
        colors.retain(|c| c.id != id);
        self.set_colors(colors);
    }

    // ==================== Fonts ====================

    /// Next free font id: numeric `max + 1` as a string. Ids that fail to
    /// parse count as 0.
    #[must_use]
    pub fn next_font_id(&self) -> String {
        let max = self
            .fonts()
            .iter()
            .map(|f| f.id.parse::<u32>().unwrap_or(0))
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Append a typography slot.
    pub fn add_font(&mut self, item: FontStyle) {
        let mut fonts = self.fonts();
        fonts.push(item);
        self.set_fonts(fonts);
    }

    /// Replace the typography slot with the same id.
    pub fn update_font(&mut self, item: &FontStyle) {
        let fonts = self
            .fonts()
            .into_iter()
            .map(|f| if f.id == item.id { item.clone() } else { f })
            .collect();
        self.set_fonts(fonts);
    }

    /// Remove the typography slot with the given id, if present.
    pub fn delete_font(&mut self, id: &str) {
        let mut fonts = self.fonts();
        fonts.retain(|f| f.id != id);
        self.set_fonts(fonts);
    }

    // ==================== Logos & photos ====================

    /// Append a batch of uploaded logos in one write.
    pub fn add_logos(&mut self, assets: Vec<BrandAsset>) {
        let mut logos = self.logos();
        logos.extend(assets);
        self.set_logos(logos);
    }

    /// Remove the logo with the given id, if present.
    pub fn delete_logo(&mut self, id: &str) {
        let mut logos = self.logos();
        logos.retain(|a| a.id != id);
        self.set_logos(logos);
    }

    /// Append a batch of uploaded photos in one write.
    pub fn add_photos(&mut self, assets: Vec<BrandAsset>) {
        let mut photos = self.photos();
        photos.extend(assets);
        self.set_photos(photos);
    }

    /// Remove the photo with the given id, if present.
    pub fn delete_photo(&mut self, id: &str) {
        let mut photos = self.photos();
        photos.retain(|a| a.id != id);
        self.set_photos(photos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn untouched_sections_resolve_to_defaults() {
        let kit = BrandKit::default();
        assert_eq!(kit.colors().len(), 4);
        assert_eq!(kit.colors()[0].name, "Navy Blue");
        assert_eq!(kit.colors()[3].hex, "#FFFFFF");
        assert_eq!(kit.logos().len(), 2);
        assert_eq!(kit.fonts().len(), 8);
        assert_eq!(kit.photos().len(), 2);
        // Resolution is pure: the aggregate itself stays empty.
        assert_eq!(kit, BrandKit::default());
    }

    #[test]
    fn emptied_section_stays_empty() {
        let mut kit = BrandKit::default();
        kit.set_colors(Vec::new());
        assert!(kit.colors().is_empty());
    }

    #[test]
    fn first_mutation_materializes_defaults() {
        let mut kit = BrandKit::default();
        kit.add_color(ColorItem {
            id: kit.next_color_id(),
            name: "New Color".to_string(),
            hex: "#000000".to_string(),
        });
        // All four defaults were promoted into the aggregate, then the
        // new entry appended.
        let stored = kit.colors.as_ref().unwrap();
        assert_eq!(stored.len(), 5);
        assert_eq!(stored[0].name, "Navy Blue");
        assert_eq!(stored[4].id, 5);
    }

    #[test]
    fn color_ids_allocate_max_plus_one() {
        let mut kit = BrandKit::default();
        assert_eq!(kit.next_color_id(), 5);

        kit.set_colors(Vec::new());
        assert_eq!(kit.next_color_id(), 1);

        kit.set_colors(vec![color(7, "Odd", "#101010")]);
        assert_eq!(kit.next_color_id(), 8);
    }

    #[test]
    fn font_ids_allocate_numeric_max_plus_one() {
        let kit = BrandKit::default();
        assert_eq!(kit.next_font_id(), "9");

        let mut kit = BrandKit::default();
        kit.set_fonts(vec![font("oops", "Weird", "Inter", 16, "Regular", "normal")]);
        assert_eq!(kit.next_font_id(), "1");
    }

    #[test]
    fn update_color_replaces_only_the_match() {
        let mut kit = BrandKit::default();
        kit.update_color(&color(2, "Action Blue", "#123ABC"));
        let colors = kit.colors();
        assert_eq!(colors[1].hex, "#123ABC");
        assert_eq!(colors[0].hex, "#0F172A");
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn delete_color_removes_exactly_one_and_preserves_order() {
        let mut kit = BrandKit::default();
        kit.delete_color(2);
        let colors = kit.colors();
        assert_eq!(colors.len(), 3);
        assert_eq!(
            colors.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 3, 4]
        );
        assert_eq!(colors[1].name, "Accent Red");
    }

    #[test]
    fn delete_missing_id_is_a_noop() {
        let mut kit = BrandKit::default();
        kit.delete_color(99);
        assert_eq!(kit.colors(), default_colors());
        kit.delete_font("99");
        assert_eq!(kit.fonts(), default_fonts());
    }

    #[test]
    fn logo_batch_appends_in_one_write() {
        let mut kit = BrandKit::default();
        kit.add_logos(vec![
            BrandAsset::upload("ws/a_1.png", "file://a", "a.png"),
            BrandAsset::upload("ws/b_2.png", "file://b", "b.png"),
        ]);
        let logos = kit.logos();
        assert_eq!(logos.len(), 4);
        assert_eq!(logos[0].kind, AssetKind::DefaultLight);
        assert_eq!(logos[2].name.as_deref(), Some("a.png"));
    }

    #[test]
    fn serde_keeps_untouched_sections_absent() {
        let kit = BrandKit {
            colors: Some(default_colors()),
            ..BrandKit::default()
        };
        let json = serde_json::to_string(&kit).unwrap();
        assert!(json.contains("\"colors\""));
        assert!(!json.contains("\"logos\""));
        assert!(!json.contains("\"fonts\""));

        let back: BrandKit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kit);
    }

    #[test]
    fn asset_kind_serializes_kebab_case() {
        let asset = BrandAsset::placeholder("def-2", AssetKind::DefaultDark);
        let json = serde_json::to_string(&asset).unwrap();
        assert_eq!(json, r#"{"id":"def-2","type":"default-dark"}"#);

        let upload: BrandAsset =
            serde_json::from_str(r#"{"id":"x","type":"upload","url":"u","name":"n"}"#).unwrap();
        assert_eq!(upload.kind, AssetKind::Upload);
        assert_eq!(upload.url.as_deref(), Some("u"));
    }
}
