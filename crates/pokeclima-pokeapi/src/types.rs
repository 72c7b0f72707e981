use serde::{Deserialize, Serialize};

/// Reference to a Pokémon detail resource, as listed under a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRef {
    pub name: String,
    pub url: String,
}

/// One base stat of a Pokémon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub base_stat: u32,
    pub stat_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub type_name: String,
}

/// Detail record of a Pokémon, trimmed to what gets displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDetail {
    pub name: String,
    /// Official artwork; PokéAPI sends `null` for some forms
    pub image_url: Option<String>,
    pub stats: Vec<Stat>,
    pub types: Option<Vec<TypeSlot>>,
}

impl CandidateDetail {
    /// Whether this Pokémon has `type_name`. `None` when the payload had no type data.
    pub fn has_type(&self, type_name: &str) -> Option<bool> {
        self.types
            .as_ref()
            .map(|types| types.iter().any(|t| t.type_name == type_name))
    }
}

// --- Raw API shapes ---

#[derive(Debug, Deserialize)]
pub(crate) struct NamedResource {
    pub name: String,
    pub url: String,
}

/// `GET /type/{name}`
#[derive(Debug, Deserialize)]
pub(crate) struct TypeListingResponse {
    pub pokemon: Vec<TypeListingEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeListingEntry {
    pub pokemon: NamedResource,
}

/// `GET /pokemon/{id}`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiPokemon {
    pub name: String,
    pub sprites: ApiSprites,
    pub stats: Vec<ApiStat>,
    #[serde(default)]
    pub types: Option<Vec<ApiTypeSlot>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSprites {
    pub other: ApiOtherSprites,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiOtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: ApiArtwork,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiArtwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiTypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

impl From<TypeListingEntry> for CandidateRef {
    fn from(entry: TypeListingEntry) -> Self {
        Self {
            name: entry.pokemon.name,
            url: entry.pokemon.url,
        }
    }
}

impl From<ApiPokemon> for CandidateDetail {
    fn from(api: ApiPokemon) -> Self {
        Self {
            name: api.name,
            image_url: api.sprites.other.official_artwork.front_default,
            stats: api
                .stats
                .into_iter()
                .map(|s| Stat {
                    base_stat: s.base_stat,
                    stat_name: s.stat.name,
                })
                .collect(),
            types: api.types.map(|types| {
                types
                    .into_iter()
                    .map(|t| TypeSlot {
                        type_name: t.type_.name,
                    })
                    .collect()
            }),
        }
    }
}
