//! Parameters of a datastore backup job, as understood by the backup
//! execution service.

use super::kind::ExclusionSet;

/// Filesystem value selecting cloud object storage as the backup destination.
pub const FILESYSTEM_CLOUD_STORAGE: &str = "gs";

/// Appended to the name prefix; the execution service adds a unique suffix after it.
pub const NAME_SEPARATOR: char = '-';

pub const PARAM_NAME: &str = "name";
pub const PARAM_FILESYSTEM: &str = "filesystem";
pub const PARAM_BUCKET: &str = "gs_bucket_name";
pub const PARAM_KIND: &str = "kind";

/// Ordered multimap of job parameters. `kind` repeats once per included kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupJobRequest {
    params: Vec<(String, String)>,
}

impl BackupJobRequest {
    /// Build the job parameters for `kinds`, skipping anything in `exclusions`.
    ///
    /// Bucket and prefix are passed through unvalidated; the execution service
    /// rejects values it cannot use.
    pub fn build(
        kinds: &[String],
        exclusions: &ExclusionSet,
        bucket_name: &str,
        name_prefix: &str,
    ) -> Self {
        let mut params = vec![
            (
                PARAM_NAME.to_string(),
                format!("{name_prefix}{NAME_SEPARATOR}"),
            ),
            (
                PARAM_FILESYSTEM.to_string(),
                FILESYSTEM_CLOUD_STORAGE.to_string(),
            ),
            (PARAM_BUCKET.to_string(), bucket_name.to_string()),
        ];

        params.extend(
            kinds
                .iter()
                .filter(|kind| !exclusions.contains(kind))
                .map(|kind| (PARAM_KIND.to_string(), kind.clone())),
        );

        Self { params }
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).next()
    }

    /// All values for `key`, in insertion order.
    pub fn get_all<'a, 'k>(&'a self, key: &'k str) -> impl Iterator<Item = &'a str> + use<'a, 'k> {
        self.params
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.get_all(PARAM_KIND).collect()
    }

    /// `application/x-www-form-urlencoded` body for the POST task.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}
