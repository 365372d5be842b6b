//! Dashboard color palette

use indexmap::IndexMap;
use serde::{Serialize, Deserialize};

/// Colors handed to the renderer alongside the chart data
///
/// No aggregation depends on these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Treemap color per industry
    pub industry_colors: IndexMap<String, String>,

    /// Color of industries missing from `industry_colors`
    pub default_industry_color: String,

    /// Choropleth scale, lightest first
    pub map_colorscale: Vec<String>,

    /// Trend line color
    pub line_color: String,

    /// Bar chart color
    pub bar_color: String,
}

impl Default for Palette {
    fn default() -> Self {
        let industry_colors = [
            ("Hardware", "#9B1BFA"),
            ("Other", "#4DC0F4"),
            ("Retail", "#FFA63E"),
            ("Transportation", "#FF2D2E"),
            ("Finance", "#3F9729"),
            ("Consumer", "#FFD63A"),
            ("Food", "#0C2E6B"),
            ("Healthcare", "#D3D3D3"),
        ];

        Self {
            industry_colors: industry_colors.iter()
                .map(|(industry, color)| (industry.to_string(), color.to_string()))
                .collect(),
            default_industry_color: "#9E9E9E".to_string(),
            map_colorscale: ["#FFD6D6", "#FF9999", "#FF4D4D", "#FF2D2E"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            line_color: "#FF2D2E".to_string(),
            bar_color: "#E4A959".to_string(),
        }
    }
}

impl Palette {
    /// Color for an industry, falling back to the default
    pub fn industry_color(&self, industry: &str) -> &str {
        self.industry_colors
            .get(industry)
            .map(String::as_str)
            .unwrap_or(&self.default_industry_color)
    }

    /// Resolve colors for the given industries, in order
    pub fn industry_colors_for<'a>(&self, industries: impl IntoIterator<Item = &'a str>) -> IndexMap<String, String> {
        industries.into_iter()
            .map(|industry| (industry.to_string(), self.industry_color(industry).to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_color_fallback() {
        let palette = Palette::default();

        assert_eq!(palette.industry_color("Retail"), "#FFA63E");
        assert_eq!(palette.industry_color("Crypto"), "#9E9E9E");
    }

    #[test]
    fn test_colors_for_keeps_order() {
        let colors = Palette::default().industry_colors_for(["Food", "Crypto"]);

        let entries: Vec<_> = colors.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("Food", "#0C2E6B"), ("Crypto", "#9E9E9E")]);
    }
}
