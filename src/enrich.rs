//! Prompt enrichment
//!
//! Turns a raw prompt plus optional style and aspect-ratio tags into the single
//! prompt string sent to the image model. Pure: no state, no randomness.

use serde::Serialize;

/// Art styles with a fixed descriptive modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Realistic,
    Anime,
    Cyberpunk,
    Sketch,
    OilPainting,
    Fantasy,
    Render3d,
    Minimalist,
}

impl Style {
    pub const ALL: [Style; 8] = [
        Style::Realistic,
        Style::Anime,
        Style::Cyberpunk,
        Style::Sketch,
        Style::OilPainting,
        Style::Fantasy,
        Style::Render3d,
        Style::Minimalist,
    ];

    /// Looks up a style by its wire identifier. Matching is exact.
    pub fn from_id(id: &str) -> Option<Style> {
        Style::ALL.into_iter().find(|style| style.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Style::Realistic => "realistic",
            Style::Anime => "anime",
            Style::Cyberpunk => "cyberpunk",
            Style::Sketch => "sketch",
            Style::OilPainting => "oil-painting",
            Style::Fantasy => "fantasy",
            Style::Render3d => "3d-render",
            Style::Minimalist => "minimalist",
        }
    }

    pub fn modifier(self) -> &'static str {
        match self {
            Style::Realistic => {
                "ultra-realistic, photorealistic, detailed photography style, 8K resolution"
            }
            Style::Anime => {
                "anime art style, vibrant colors, detailed anime illustration, studio quality"
            }
            Style::Cyberpunk => {
                "cyberpunk aesthetic, neon lights, futuristic, dark sci-fi atmosphere, high tech"
            }
            Style::Sketch => {
                "pencil sketch style, hand-drawn illustration, artistic sketch, detailed linework"
            }
            Style::OilPainting => {
                "oil painting style, classical art, rich textures, masterpiece quality, fine art"
            }
            Style::Fantasy => {
                "fantasy art style, magical, ethereal lighting, epic fantasy illustration"
            }
            Style::Render3d => {
                "3D rendered, CGI quality, octane render, volumetric lighting, photorealistic 3D"
            }
            Style::Minimalist => {
                "minimalist design, clean aesthetic, simple composition, modern art style"
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::Realistic => "Realistic",
            Style::Anime => "Anime",
            Style::Cyberpunk => "Cyberpunk",
            Style::Sketch => "Sketch",
            Style::OilPainting => "Oil Paint",
            Style::Fantasy => "Fantasy",
            Style::Render3d => "3D Render",
            Style::Minimalist => "Minimal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Style::Realistic => "Photorealistic quality",
            Style::Anime => "Japanese art style",
            Style::Cyberpunk => "Neon futuristic",
            Style::Sketch => "Hand-drawn look",
            Style::OilPainting => "Classical art",
            Style::Fantasy => "Magical & ethereal",
            Style::Render3d => "CGI quality",
            Style::Minimalist => "Clean & simple",
        }
    }
}

/// Aspect ratios offered to the UI. Enrichment accepts any label, these are
/// only advertised.
pub const ASPECT_RATIOS: [(&str, &str); 4] = [
    ("1:1", "Square"),
    ("16:9", "Landscape"),
    ("9:16", "Portrait"),
    ("4:3", "Standard"),
];

/// Builds the enriched prompt.
///
/// The caller has already rejected blank prompts. Unknown styles and empty
/// aspect ratios are skipped silently.
pub fn enrich(prompt: &str, style: Option<&str>, aspect_ratio: Option<&str>) -> String {
    let mut enriched = prompt.trim().to_string();

    if let Some(style) = style.and_then(Style::from_id) {
        enriched.push_str(", ");
        enriched.push_str(style.modifier());
    }

    if let Some(ratio) = aspect_ratio.filter(|r| !r.is_empty()) {
        enriched.push_str(&format!(", {} aspect ratio composition", ratio));
    }

    enriched
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub modifier: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AspectRatioOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalogue {
    pub styles: Vec<StyleOption>,
    pub aspect_ratios: Vec<AspectRatioOption>,
}

/// The fixed style and aspect-ratio sets, in display order.
pub fn catalogue() -> Catalogue {
    Catalogue {
        styles: Style::ALL
            .into_iter()
            .map(|style| StyleOption {
                id: style.id(),
                label: style.label(),
                description: style.description(),
                modifier: style.modifier(),
            })
            .collect(),
        aspect_ratios: ASPECT_RATIOS
            .into_iter()
            .map(|(id, label)| AspectRatioOption { id, label })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_prompt_is_trimmed_only() {
        assert_eq!(enrich("  a quiet lake  ", None, None), "a quiet lake");
        assert_eq!(enrich("a quiet lake", None, Some("")), "a quiet lake");
    }

    #[test]
    fn test_known_styles_append_their_modifier() {
        for style in Style::ALL {
            let enriched = enrich("a castle", Some(style.id()), None);
            assert_eq!(enriched, format!("a castle, {}", style.modifier()));
        }
    }

    #[test]
    fn test_unknown_style_is_ignored() {
        assert_eq!(enrich("a castle", Some("watercolor"), None), "a castle");
        assert_eq!(enrich("a castle", Some("Anime"), None), "a castle");
        assert_eq!(enrich("a castle", Some(""), None), "a castle");
    }

    #[test]
    fn test_aspect_ratio_suffix() {
        assert_eq!(
            enrich("a castle", None, Some("9:16")),
            "a castle, 9:16 aspect ratio composition"
        );
        // Free-form labels pass through untouched.
        assert_eq!(
            enrich("a castle", Some("nope"), Some("21:9")),
            "a castle, 21:9 aspect ratio composition"
        );
    }

    #[test]
    fn test_style_comes_before_aspect_ratio() {
        assert_eq!(
            enrich("a red fox", Some("anime"), Some("16:9")),
            "a red fox, anime art style, vibrant colors, detailed anime illustration, studio quality, 16:9 aspect ratio composition"
        );
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let first = enrich(" neon alley ", Some("cyberpunk"), Some("4:3"));
        let second = enrich(" neon alley ", Some("cyberpunk"), Some("4:3"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_style_ids_round_trip() {
        for style in Style::ALL {
            assert_eq!(Style::from_id(style.id()), Some(style));
        }
        assert_eq!(Style::from_id("oil-painting"), Some(Style::OilPainting));
        assert_eq!(Style::from_id("3d-render"), Some(Style::Render3d));
    }

    #[test]
    fn test_catalogue_lists_every_option() {
        let catalogue = catalogue();
        assert_eq!(catalogue.styles.len(), Style::ALL.len());
        assert_eq!(catalogue.styles[0].id, "realistic");
        assert_eq!(catalogue.aspect_ratios.len(), 4);

        let json = serde_json::to_value(&catalogue).unwrap();
        assert_eq!(json["aspectRatios"][1]["id"], "16:9");
        assert_eq!(json["styles"][4]["label"], "Oil Paint");
    }
}
