//! S3 feature categories
//!
//! Maps s3-tests test names onto feature areas using ordered keyword rules.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// S3 feature area a test belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    BucketOperations,
    ObjectOperations,
    MultipartUpload,
    ListObjects,
    Authentication,
    HeadersMetadata,
    Versioning,
    Acl,
    Cors,
    Encryption,
    Lifecycle,
    Tagging,
    Website,
    Logging,
    Notifications,
    Replication,
    ObjectLock,
    RangeRequests,
    ConditionalRequests,
    Other,
}

/// Keyword rules in precedence order. The first category with a keyword
/// contained in the lower-cased test name wins.
const RULES: &[(Category, &[&str])] = &[
    (
        Category::BucketOperations,
        &[
            "bucket_create",
            "bucket_list",
            "bucket_delete",
            "bucket_head",
            "bucket_notexist",
            "bucket_recreate",
            "list_buckets",
        ],
    ),
    (
        Category::ObjectOperations,
        &[
            "object_write",
            "object_read",
            "object_head",
            "object_copy",
            "get_object",
            "put_object",
            "delete_object",
            "head_object",
        ],
    ),
    (
        Category::MultipartUpload,
        &["multipart", "upload_part", "complete_multipart", "abort_multipart"],
    ),
    (
        Category::ListObjects,
        &["list_objects", "list_v2", "list_prefix", "list_delimiter", "list_marker"],
    ),
    (
        Category::Authentication,
        &["auth", "signature", "access_key", "secret_key", "anon"],
    ),
    (
        Category::HeadersMetadata,
        &["header", "metadata", "content_type", "cache_control", "etag"],
    ),
    (Category::Versioning, &["version", "versioning"]),
    (Category::Acl, &["acl", "grant", "permission"]),
    (Category::Cors, &["cors"]),
    (Category::Encryption, &["encrypt", "sse"]),
    (Category::Lifecycle, &["lifecycle", "expiration"]),
    (Category::Tagging, &["tag", "tagging"]),
    (Category::Website, &["website"]),
    (Category::Logging, &["logging"]),
    (Category::Notifications, &["notification"]),
    (Category::Replication, &["replication"]),
    (Category::ObjectLock, &["lock", "retention", "legal_hold"]),
    (Category::RangeRequests, &["range", "byte_range"]),
    (
        Category::ConditionalRequests,
        &["if_match", "if_none_match", "if_modified", "if_unmodified"],
    ),
];

impl Category {
    /// Classify a test name. Total: unmatched names fall into `Other`.
    pub fn classify(test_name: &str) -> Category {
        let name = test_name.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    /// Display name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Category::BucketOperations => "Bucket Operations",
            Category::ObjectOperations => "Object Operations",
            Category::MultipartUpload => "Multipart Upload",
            Category::ListObjects => "List Objects",
            Category::Authentication => "Authentication",
            Category::HeadersMetadata => "Headers & Metadata",
            Category::Versioning => "Versioning",
            Category::Acl => "ACL",
            Category::Cors => "CORS",
            Category::Encryption => "Encryption",
            Category::Lifecycle => "Lifecycle",
            Category::Tagging => "Tagging",
            Category::Website => "Website",
            Category::Logging => "Logging",
            Category::Notifications => "Notifications",
            Category::Replication => "Replication",
            Category::ObjectLock => "Object Lock",
            Category::RangeRequests => "Range Requests",
            Category::ConditionalRequests => "Conditional Requests",
            Category::Other => "Other",
        }
    }
}

// Reports list categories alphabetically by display name, not in rule order.
impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
