//! TMX (Tiled XML) reader.
//!
//! Only the pieces the placement planner needs are kept: the map size, the
//! tileset id ranges and the csv payload of the layer called `Map`.
pub mod scene;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;
use tracing::{debug, info};

use crate::model::{MapModel, TilesetEntry};

/// Name of the tile layer the planner reads.
pub const DATA_LAYER: &str = "Map";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Carries the missing attribute, or [`MAP_ROOT`] when there is no
    /// `<map>` element at all.
    #[error("{}", dimensions_message(.0))]
    MissingOrInvalidDimensions(&'static str),
    #[error("tileset #{index} has a missing or malformed `{attribute}` attribute")]
    MalformedTileset {
        index: usize,
        attribute: &'static str,
    },
    #[error("no `<layer name=\"Map\">` with a `<data>` element")]
    MissingDataLayer,
    #[error("data layer holds {found} tile ids, expected {expected} (width × height)")]
    DataSizeMismatch { expected: usize, found: usize },
    #[error("tile id #{position} (`{token}`) is not an unsigned integer")]
    MalformedTileId { position: usize, token: String },
    #[error("invalid XML: {0}")]
    Xml(String),
}

/// Payload of [`ParseError::MissingOrInvalidDimensions`] for a document
/// without a `<map>` root.
pub const MAP_ROOT: &str = "map";

fn dimensions_message(what: &str) -> String {
    if what == MAP_ROOT {
        "document has no `<map>` root element".to_string()
    } else {
        format!("map `{what}` attribute is missing or not an unsigned integer")
    }
}

fn xml_err(e: impl std::fmt::Display) -> ParseError {
    ParseError::Xml(e.to_string())
}

/// Parse a whole TMX document into a [`MapModel`].
///
/// The grid is filled row-major: the first `width` ids are row 0, the next
/// `width` ids row 1 and so on. Any error aborts the parse; there is no
/// partial model.
pub fn parse_tmx(xml: &str) -> Result<MapModel, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // names of the currently open elements, outermost first
    let mut open: Vec<Vec<u8>> = Vec::new();

    let mut dims: Option<(u32, u32)> = None;
    let mut tilesets: Vec<TilesetEntry> = Vec::new();

    // depth of the chosen `Map` layer element, while it is open
    let mut map_layer_depth: Option<usize> = None;
    let mut data_depth: Option<usize> = None;
    let mut payload = String::new();
    let mut data: Option<String> = None;

    loop {
        let event = reader.read_event().map_err(xml_err)?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let empty = matches!(event, Event::Empty(_));
                let parent = open.last().map(Vec::as_slice);

                match (e.name().as_ref(), parent) {
                    (b"map", None) => dims = Some(read_dimensions(e)?),
                    (b"tileset", Some(b"map")) => {
                        let entry = read_tileset(e, tilesets.len())?;
                        debug!(
                            "tileset `{}`: gids {}..+{}",
                            entry.prefix, entry.first_gid, entry.tile_count
                        );
                        tilesets.push(entry);
                    }
                    (b"layer", Some(b"map")) if data.is_none() && map_layer_depth.is_none() => {
                        let name = attr(e, "name")?;
                        if name.as_deref().map(str::trim) == Some(DATA_LAYER) && !empty {
                            map_layer_depth = Some(open.len());
                        }
                    }
                    (b"data", Some(b"layer")) if map_layer_depth == Some(open.len() - 1) => {
                        if empty {
                            data = Some(String::new());
                        } else {
                            data_depth = Some(open.len());
                            payload.clear();
                        }
                    }
                    _ => {}
                }

                if !empty {
                    open.push(e.name().as_ref().to_vec());
                }
            }
            Event::Text(t) if data_depth.is_some() => {
                payload.push_str(&t.unescape().map_err(xml_err)?);
            }
            Event::End(_) => {
                open.pop();
                if data_depth == Some(open.len()) {
                    data_depth = None;
                    data = Some(std::mem::take(&mut payload));
                }
                if map_layer_depth == Some(open.len()) {
                    map_layer_depth = None;
                }
            }
            Event::Eof if open.is_empty() => break,
            Event::Eof => {
                let unclosed = String::from_utf8_lossy(open.last().map_or(&[][..], Vec::as_slice))
                    .into_owned();
                return Err(ParseError::Xml(format!(
                    "unexpected end of document, `<{unclosed}>` is not closed"
                )));
            }
            _ => {}
        }
    }

    let (width, height) = dims.ok_or(ParseError::MissingOrInvalidDimensions(MAP_ROOT))?;
    let data = data.ok_or(ParseError::MissingDataLayer)?;
    let grid = parse_grid(&data, width, height)?;

    info!(
        "parsed {}x{} map with {} tileset(s)",
        width,
        height,
        tilesets.len()
    );

    Ok(MapModel {
        width,
        height,
        grid,
        tilesets,
    })
}

// ─────────────────────────────────────────────────────
/// Helper: value of attribute `name`, unescaped. `None` if absent.
fn attr(e: &BytesStart, name: &str) -> Result<Option<String>, ParseError> {
    match e.try_get_attribute(name).map_err(xml_err)? {
        Some(a) => Ok(Some(a.unescape_value().map_err(xml_err)?.into_owned())),
        None => Ok(None),
    }
}

fn uint_attr(e: &BytesStart, name: &str) -> Result<Option<u32>, ParseError> {
    Ok(attr(e, name)?.and_then(|v| v.trim().parse().ok()))
}

fn read_dimensions(e: &BytesStart) -> Result<(u32, u32), ParseError> {
    let width =
        uint_attr(e, "width")?.ok_or(ParseError::MissingOrInvalidDimensions("width"))?;
    let height =
        uint_attr(e, "height")?.ok_or(ParseError::MissingOrInvalidDimensions("height"))?;
    Ok((width, height))
}

fn read_tileset(e: &BytesStart, index: usize) -> Result<TilesetEntry, ParseError> {
    let malformed = |attribute| ParseError::MalformedTileset { index, attribute };

    let first_gid = uint_attr(e, "firstgid")?.ok_or_else(|| malformed("firstgid"))?;
    let prefix = attr(e, "name")?.ok_or_else(|| malformed("name"))?;
    let tile_count = uint_attr(e, "tilecount")?.ok_or_else(|| malformed("tilecount"))?;

    Ok(TilesetEntry {
        first_gid,
        tile_count,
        prefix: prefix.trim().to_string(),
    })
}

/// Split the csv payload into `height` rows of `width` ids.
fn parse_grid(payload: &str, width: u32, height: u32) -> Result<Vec<Vec<u32>>, ParseError> {
    let payload = payload.trim();
    let tokens: Vec<&str> = if payload.is_empty() {
        Vec::new()
    } else {
        payload.split(',').map(str::trim).collect()
    };

    let expected = width as usize * height as usize;
    if tokens.len() != expected {
        return Err(ParseError::DataSizeMismatch {
            expected,
            found: tokens.len(),
        });
    }

    let ids = tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<u32>().map_err(|_| ParseError::MalformedTileId {
                position,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if width == 0 {
        return Ok(vec![Vec::new(); height as usize]);
    }
    Ok(ids.chunks(width as usize).map(<[u32]>::to_vec).collect())
}
