use crate::error::{RepoRecordError, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;
use std::str::FromStr;
use tracing::{debug, trace};

/// Looks `$key` up among the named typed fields of `$record`.
///
/// `None` means the key is not one of them; `Some(None)` means it is but the
/// field is unset.
macro_rules! documented {
    ($record:ident, $key:ident; $($field:ident),+ $(,)?) => {
        match $key {
            $(stringify!($field) => Some(to_json(&$record.$field)),)+
            _ => None,
        }
    };
}

/// Permission flags the requesting account holds on a repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull: Option<bool>,
    /// Newer role flags (`maintain`, `triage`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RepoPermissions {
    pub fn get(&self, key: &str) -> Option<Value> {
        lookup(&self.extra, key, |key| {
            documented!(self, key; admin, push, pull)
        })
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        *self = assign(self, key, value.into())?;
        Ok(())
    }
}

/// Account that owns a repository (user or organization)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravatar_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gists_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_events_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repos_url: Option<String>,
    /// Undocumented keys from the source document
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RepoOwner {
    /// Value stored under `key`, or `None` if the owner has no such field.
    pub fn get(&self, key: &str) -> Option<Value> {
        lookup(&self.extra, key, |key| match key {
            "type" => Some(to_json(&self.account_type)),
            _ => documented!(self, key;
                login, id, avatar_url, gravatar_id, site_admin, url, html_url, gists_url,
                following_url, followers_url, subscriptions_url, received_events_url,
                events_url, starred_url, organizations_url, repos_url),
        })
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        *self = assign(self, key, value.into())?;
        Ok(())
    }
}

/// One GitHub repository resource.
///
/// Every documented attribute of the upstream resource is an optional typed
/// field; anything else found in the source document is kept in `extra`.
/// [`RepoRecord::get`] reads both uniformly by field name. URL attributes stay
/// plain strings since most of them are URI templates (`.../branches{/branch}`),
/// and timestamps are kept exactly as received; see [`RepoRecord::created_at_utc`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror_url: Option<String>,

    // Counts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stargazers_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_issues: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_issues_count: Option<u64>,

    // Flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_pages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_downloads: Option<bool>,

    // Timestamps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pushed_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<RepoPermissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<RepoOwner>,

    // Resource URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svn_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blobs_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborators_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployments_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_commits_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_refs_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_tags_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hooks_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_comment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_events_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merges_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestones_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulls_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stargazers_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribers_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trees_url: Option<String>,

    /// Undocumented keys from the source document
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RepoRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Decode a repository document that has already been parsed into JSON.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(RepoRecordError::NotAnObject);
        }
        let record: RepoRecord = serde_json::from_value(value)?;
        debug!(
            name = record.name.as_deref().unwrap_or("<unnamed>"),
            extra_fields = record.extra.len(),
            "Decoded repository record"
        );
        Ok(record)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                RepoRecordError::Io(e.into())
            } else {
                RepoRecordError::Json(e)
            }
        })?;
        Self::from_value(value)
    }

    /// Encode back into the upstream resource shape, omitting absent fields.
    pub fn to_value(&self) -> Result<Value> {
        Ok(Value::Object(field_map(self)?))
    }

    /// Value stored under `key`.
    ///
    /// Never fails: keys that were never set (or were set to `null`) yield
    /// `None`. Nested records come back as JSON objects.
    pub fn get(&self, key: &str) -> Option<Value> {
        lookup(&self.extra, key, |key| {
            documented!(self, key;
                name, id, full_name, description, homepage, language, default_branch,
                mirror_url, size, forks, forks_count, watchers, watchers_count,
                stargazers_count, open_issues, open_issues_count, fork, private, has_issues,
                has_wiki, has_pages, has_projects, has_downloads, created_at, updated_at,
                pushed_at, permissions, owner, url, html_url, git_url, ssh_url, clone_url,
                svn_url, archive_url, assignees_url, blobs_url, branches_url,
                collaborators_url, comments_url, commits_url, compare_url, contents_url,
                contributors_url, deployments_url, downloads_url, events_url, forks_url,
                git_commits_url, git_refs_url, git_tags_url, hooks_url, issue_comment_url,
                issue_events_url, issues_url, keys_url, labels_url, languages_url,
                merges_url, milestones_url, notifications_url, pulls_url, releases_url,
                stargazers_url, statuses_url, subscribers_url, subscription_url, tags_url,
                teams_url, trees_url)
        })
    }

    /// Assign `value` to the field named `key`.
    ///
    /// Documented fields only accept values of their own type; on mismatch the
    /// record is left untouched. Unknown keys land in `extra`. A `null` value
    /// clears the field. Inside a nested object, `null` members that map to
    /// documented fields (e.g. `owner.gravatar_id`) are stored as absent and
    /// do not read back; undocumented members keep their value, `null` included.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        *self = assign(self, key, value.into())?;
        Ok(())
    }

    /// Names of all fields currently present, sorted.
    pub fn fields(&self) -> Vec<String> {
        field_map(self)
            .map(|fields| {
                fields
                    .into_iter()
                    .filter(|(_, value)| !value.is_null())
                    .map(|(key, _)| key)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn owner_login(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|owner| owner.login.as_deref())
    }

    /// `created_at` parsed as RFC 3339, or `None` if absent or unparseable.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.created_at.as_deref())
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.updated_at.as_deref())
    }

    pub fn pushed_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.pushed_at.as_deref())
    }
}

impl FromStr for RepoRecord {
    type Err = RepoRecordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

fn field_map<T: Serialize>(record: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(RepoRecordError::NotAnObject),
    }
}

fn lookup(
    extra: &Map<String, Value>,
    key: &str,
    documented: impl FnOnce(&str) -> Option<Option<Value>>,
) -> Option<Value> {
    // Flattened extras serialize last, so they shadow a documented key of the same name
    let value = match extra.get(key) {
        Some(value) => Some(value.clone()),
        None => documented(key)?,
    };
    value.filter(|value| !value.is_null())
}

fn to_json<T: Serialize>(field: &Option<T>) -> Option<Value> {
    field.as_ref().and_then(|value| serde_json::to_value(value).ok())
}

fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw?)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

fn assign<T: Serialize + DeserializeOwned>(record: &T, key: &str, value: Value) -> Result<T> {
    let mut fields = field_map(record)?;
    if value.is_null() {
        fields.remove(key);
    } else {
        fields.insert(key.to_owned(), value);
    }
    trace!(key, "Assigning repository field");
    serde_json::from_value(Value::Object(fields)).map_err(|source| RepoRecordError::FieldType {
        key: key.to_owned(),
        source,
    })
}
