// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Named lunar features (maria and craters) to be labelled on the overlay.
//!
//! Two catalogs are compiled into the crate, [`MARIA_RESOURCE`] and
//! [`CRATERS_RESOURCE`]. A [`FeatureCatalog`] can instead be pointed at a
//! directory containing files with the same names.

mod error;
mod read;

pub use error::ReadCatalogError;

use std::{
    fs::File,
    hash::{Hash, Hasher},
    io::{BufReader, Cursor},
    path::{Path, PathBuf},
};

use indexmap::IndexSet;
use itertools::Itertools;
use log::{debug, warn};
use strum::IntoEnumIterator;

/// The name of the built-in mare catalog.
pub const MARIA_RESOURCE: &str = "moon_maria.csv";

/// The name of the built-in crater catalog.
pub const CRATERS_RESOURCE: &str = "moon_craters.csv";

const EMBEDDED_RESOURCES: [(&str, &str); 2] = [
    (MARIA_RESOURCE, include_str!("../../data/moon_maria.csv")),
    (CRATERS_RESOURCE, include_str!("../../data/moon_craters.csv")),
];

/// Craters that are easy to make out on an ordinary photo of the Moon. These
/// are the craters labelled by default.
pub const VISIBLE_CRATERS: [&str; 12] = [
    "Tycho",
    "Copernicus",
    "Aristarchus",
    "Kepler",
    "Plato",
    "Ptolemaeus",
    "Posidonius",
    "Theophilus",
    "Hercules",
    "Piccolomini",
    "Atlas",
    "Macrobius",
];

/// The kinds of feature in a catalog.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
pub enum PointKind {
    #[strum(serialize = "mare")]
    Mare,

    #[strum(serialize = "crater")]
    Crater,
}

lazy_static::lazy_static! {
    pub static ref POINT_KINDS_COMMA_SEPARATED: String = PointKind::iter().join(", ");
}

impl PointKind {
    /// The built-in catalog holding this kind of feature.
    pub fn resource_name(self) -> &'static str {
        match self {
            PointKind::Mare => MARIA_RESOURCE,
            PointKind::Crater => CRATERS_RESOURCE,
        }
    }
}

/// A named feature on the lunar surface.
#[derive(Debug, Clone)]
pub struct PointOfInterest {
    pub kind: PointKind,
    pub name: String,

    /// [kilometres]
    pub diameter_km: f64,

    /// Selenographic latitude, positive north [degrees].
    pub latitude_deg: f64,

    /// Selenographic longitude, positive east [degrees].
    pub longitude_deg: f64,
}

// Two points are the same only if every field is bitwise identical. This gives
// a total equality even for floats, so points can live in a hash set.
impl PartialEq for PointOfInterest {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.name == other.name
            && self.diameter_km.to_bits() == other.diameter_km.to_bits()
            && self.latitude_deg.to_bits() == other.latitude_deg.to_bits()
            && self.longitude_deg.to_bits() == other.longitude_deg.to_bits()
    }
}

impl Eq for PointOfInterest {}

impl Hash for PointOfInterest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.name.hash(state);
        self.diameter_km.to_bits().hash(state);
        self.latitude_deg.to_bits().hash(state);
        self.longitude_deg.to_bits().hash(state);
    }
}

/// Is this point one of the [`VISIBLE_CRATERS`]?
pub fn is_visible_crater(point: &PointOfInterest) -> bool {
    point.kind == PointKind::Crater && VISIBLE_CRATERS.contains(&point.name.as_str())
}

/// What to do when a catalog resource can't be found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingResourcePolicy {
    /// Warn and carry on without the resource's points.
    #[default]
    Ignore,

    /// Fail the load.
    Error,
}

/// Where catalog text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogResource {
    /// One of the catalogs compiled into the crate, by name.
    Embedded(String),

    /// A file on disk.
    File(PathBuf),
}

impl std::fmt::Display for CatalogResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogResource::Embedded(name) => write!(f, "{name} (built-in)"),
            CatalogResource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A collection of [`PointOfInterest`]s. Iteration follows insertion order, and
/// inserting a point that is already present does nothing.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    points: IndexSet<PointOfInterest>,
    policy: MissingResourcePolicy,
    directory: Option<PathBuf>,
}

impl FeatureCatalog {
    /// An empty catalog reading built-in resources and ignoring missing ones.
    pub fn new() -> FeatureCatalog {
        FeatureCatalog::default()
    }

    pub fn with_policy(mut self, policy: MissingResourcePolicy) -> FeatureCatalog {
        self.policy = policy;
        self
    }

    /// Read the standard catalogs from files in this directory rather than
    /// using the built-in ones.
    pub fn with_directory<P: AsRef<Path>>(mut self, directory: P) -> FeatureCatalog {
        self.directory = Some(directory.as_ref().to_path_buf());
        self
    }

    pub fn policy(&self) -> MissingResourcePolicy {
        self.policy
    }

    /// The resource that the standard catalog for this kind of point is read
    /// from.
    pub fn standard_resource(&self, kind: PointKind) -> CatalogResource {
        match &self.directory {
            Some(dir) => CatalogResource::File(dir.join(kind.resource_name())),
            None => CatalogResource::Embedded(kind.resource_name().to_string()),
        }
    }

    /// Add every mare. Returns the number of points added.
    pub fn load_maria(&mut self) -> Result<usize, ReadCatalogError> {
        let resource = self.standard_resource(PointKind::Mare);
        self.load_points(PointKind::Mare, &resource, |_| true)
    }

    /// Add the [`VISIBLE_CRATERS`]. Returns the number of points added.
    pub fn load_visible_craters(&mut self) -> Result<usize, ReadCatalogError> {
        self.load_craters(is_visible_crater)
    }

    /// Add the craters accepted by `filter`, e.g. all those above a diameter.
    /// Returns the number of points added.
    pub fn load_craters<F>(&mut self, filter: F) -> Result<usize, ReadCatalogError>
    where
        F: Fn(&PointOfInterest) -> bool,
    {
        let resource = self.standard_resource(PointKind::Crater);
        self.load_points(PointKind::Crater, &resource, filter)
    }

    /// Parse `resource`, treating every record as a point of `kind`, and add
    /// those accepted by `filter`. A malformed record fails the load and leaves
    /// the catalog untouched. Returns the number of points added.
    pub fn load_points<F>(
        &mut self,
        kind: PointKind,
        resource: &CatalogResource,
        filter: F,
    ) -> Result<usize, ReadCatalogError>
    where
        F: Fn(&PointOfInterest) -> bool,
    {
        debug!("Loading {kind} catalog from {resource}");
        let source_name = resource.to_string();
        let parsed = match resource {
            CatalogResource::Embedded(name) => {
                match EMBEDDED_RESOURCES.iter().find(|(n, _)| *n == name.as_str()) {
                    Some((_, text)) => {
                        read::parse_catalog(&mut Cursor::new(text.as_bytes()), kind, &source_name)?
                    }
                    None => return self.missing(resource),
                }
            }

            CatalogResource::File(path) => match File::open(path) {
                Ok(f) => read::parse_catalog(&mut BufReader::new(f), kind, &source_name)?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return self.missing(resource)
                }
                Err(err) => return Err(ReadCatalogError::IO { source_name, err }),
            },
        };

        let before = self.points.len();
        let total = parsed.len();
        self.points.extend(parsed.into_iter().filter(|p| filter(p)));
        let added = self.points.len() - before;
        debug!("Added {added} of {total} {kind} records from {resource}");
        Ok(added)
    }

    fn missing(&self, resource: &CatalogResource) -> Result<usize, ReadCatalogError> {
        match self.policy {
            MissingResourcePolicy::Ignore => {
                warn!("Catalog resource {resource} does not exist; no points loaded from it");
                Ok(0)
            }
            MissingResourcePolicy::Error => {
                Err(ReadCatalogError::MissingResource(resource.to_string()))
            }
        }
    }

    /// Add a single point. Returns `false` if it was already present.
    pub fn insert(&mut self, point: PointOfInterest) -> bool {
        self.points.insert(point)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The number of points of each kind, in [`PointKind`] order.
    pub fn counts(&self) -> Vec<(PointKind, usize)> {
        PointKind::iter()
            .map(|kind| (kind, self.points.iter().filter(|p| p.kind == kind).count()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FeatureCatalog {
    type Item = &'a PointOfInterest;
    type IntoIter = indexmap::set::Iter<'a, PointOfInterest>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Parse catalog text from a file without adding it to any catalog. Useful to
/// check a catalog before using it.
pub fn read_catalog_file<P: AsRef<Path>>(
    path: P,
    kind: PointKind,
) -> Result<Vec<PointOfInterest>, ReadCatalogError> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let f = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => ReadCatalogError::MissingResource(source_name.clone()),
        _ => ReadCatalogError::IO {
            source_name: source_name.clone(),
            err,
        },
    })?;
    read::parse_catalog(&mut BufReader::new(f), kind, &source_name)
}
