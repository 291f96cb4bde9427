use super::{HnError, Story};
use serde::Deserialize;
use serde_json::Value;

/// Name of the response field holding the search results.
///
pub const HITS_FIELD: &str = "hits";

/// Algolia sends `objectID` as a string but older fixtures use numbers.
///
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    Number(u64),
    Text(String),
}

impl ObjectId {
    fn into_u64(self) -> Result<u64, HnError> {
        match self {
            ObjectId::Number(id) => Ok(id),
            ObjectId::Text(text) => text
                .trim()
                .parse::<u64>()
                .map_err(|_| HnError::InvalidObjectId(text)),
        }
    }
}

/// A single search hit as returned by the API. Comment hits and deleted
/// stories leave most fields null, so everything but the ID is optional.
///
#[derive(Debug, Deserialize)]
pub struct HitModel {
    #[serde(rename = "objectID")]
    pub object_id: ObjectId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub num_comments: Option<u64>,
    #[serde(default)]
    pub points: Option<i64>,
}

impl HitModel {
    pub fn into_story(self) -> Result<Story, HnError> {
        Ok(Story {
            id: self.object_id.into_u64()?,
            title: self.title.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            num_comments: self.num_comments.unwrap_or(0),
            points: self.points.unwrap_or(0),
        })
    }
}

/// Extract stories from a response body. Anything that is not an object
/// with a hits array is rejected as a whole; there are no partial results.
///
pub fn stories_from_body(body: Value) -> Result<Vec<Story>, HnError> {
    let hits = match body {
        Value::Object(mut map) => map
            .remove(HITS_FIELD)
            .ok_or(HnError::MissingField { field: HITS_FIELD })?,
        _ => return Err(HnError::MissingField { field: HITS_FIELD }),
    };
    let models: Vec<HitModel> = serde_json::from_value(hits)?;
    models.into_iter().map(HitModel::into_story).collect()
}
