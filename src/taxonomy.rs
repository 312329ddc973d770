use std::collections::HashMap;

use eframe::egui::Color32;

use crate::dataset::MetadataEntry;

pub const DEFAULT_FILL: Color32 = Color32::BLACK;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectorInfo {
    pub sector_id: Option<String>,
    pub display_name: String,
    pub code: String,
}

/// Node id to display metadata. Lookups never fail: a missing entry resolves
/// to the default fill and an id-only label.
#[derive(Clone, Debug, Default)]
pub struct SectorTaxonomy {
    entries: HashMap<String, SectorInfo>,
}

impl SectorTaxonomy {
    pub fn from_metadata(metadata: &[MetadataEntry]) -> Self {
        let entries = metadata
            .iter()
            .map(|entry| {
                (
                    entry.id.clone(),
                    SectorInfo {
                        sector_id: entry.sector_id.clone(),
                        display_name: entry.display_name.clone(),
                        code: entry.code.clone(),
                    },
                )
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&SectorInfo> {
        self.entries.get(id)
    }

    pub fn sector_of(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|info| info.sector_id.as_deref())
    }

    pub fn label_for(&self, id: &str) -> String {
        match self.get(id) {
            Some(info) => format!("{} ({})", info.display_name, info.code),
            None => {
                tracing::warn!(id, "no metadata entry for hovered node");
                id.to_owned()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Sector id to marker fill.
#[derive(Clone, Debug)]
pub struct ColorMap {
    colors: HashMap<&'static str, Color32>,
    default_fill: Color32,
}

impl ColorMap {
    pub fn hs92() -> Self {
        let colors = HashMap::from([
            ("product-HS92-1", Color32::from_rgb(125, 218, 161)),
            ("product-HS92-2", Color32::from_rgb(0xF5, 0xCF, 0x23)),
            ("product-HS92-3", Color32::from_rgb(218, 180, 125)),
            ("product-HS92-4", Color32::from_rgb(187, 150, 138)),
            ("product-HS92-5", Color32::from_rgb(217, 123, 123)),
            ("product-HS92-6", Color32::from_rgb(197, 123, 217)),
            ("product-HS92-7", Color32::from_rgb(141, 123, 216)),
            ("product-HS92-8", Color32::from_rgb(123, 162, 217)),
            ("product-HS92-9", Color32::from_rgb(125, 218, 218)),
            ("product-HS92-10", Color32::from_rgb(0x2a, 0x60, 0x7c)),
            ("product-HS92-14", Color32::from_rgb(178, 61, 109)),
        ]);

        Self {
            colors,
            default_fill: DEFAULT_FILL,
        }
    }

    pub fn get_or_default(&self, sector_id: Option<&str>) -> Color32 {
        sector_id
            .and_then(|sector| self.colors.get(sector).copied())
            .unwrap_or(self.default_fill)
    }

    pub fn fill_for(&self, taxonomy: &SectorTaxonomy, node_id: &str) -> Color32 {
        self.get_or_default(taxonomy.sector_of(node_id))
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::hs92()
    }
}
