use http::Uri;

/// Resource coordinates of a CosmosDB REST request: the resource type the
/// request addresses plus the case sensitive resource id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceCoordinate {
    /// Resource type segment, e.g. `dbs`, `colls` or `docs`.
    pub resource_type: String,
    /// Resource id, e.g. `dbs/tempdb/colls/tempcoll`. May be empty.
    pub resource_id: String,
}

impl ResourceCoordinate {
    /// Create a coordinate from already known parts.
    pub fn new(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }

    /// Derive the coordinate from a REST path.
    ///
    /// A single leading and a single trailing `/` are stripped before the path
    /// is split on `/`:
    ///
    /// - an empty path yields an empty type and id;
    /// - an even number of segments addresses a specific resource: the type is
    ///   the second to last segment and the id is the whole stripped path;
    /// - an odd number of segments addresses a feed: the type is the last
    ///   segment and the id is everything before it, or empty for a single
    ///   top level segment like `dbs`.
    ///
    /// The function is total: any string input yields a (possibly empty) pair.
    pub fn from_path(path: &str) -> Self {
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);

        if path.is_empty() {
            return Self::default();
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() % 2 == 0 {
            Self {
                resource_type: parts[parts.len() - 2].to_string(),
                resource_id: path.to_string(),
            }
        } else {
            Self {
                resource_type: parts[parts.len() - 1].to_string(),
                resource_id: match path.rfind('/') {
                    Some(idx) => path[..idx].to_string(),
                    None => String::new(),
                },
            }
        }
    }

    /// Derive the coordinate from a full endpoint URI.
    pub fn from_uri(uri: &Uri) -> Self {
        Self::from_path(uri.path())
    }
}
