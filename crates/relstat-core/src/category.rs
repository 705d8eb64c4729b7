/// Task categories, matched by substring against the task name.
///
/// Order matters: some labels are substrings of others, so the more
/// specific label must be tested first (`nightly-l10n-signing` before
/// `nightly-l10n`). The empty string is the catch-all and matches last.
pub const TASK_CATEGORIES: &[&str] = &[
    "balrog",
    "beetmover-checksums",
    "beetmover-repackage",
    "checksums-signing",
    "nightly-l10n-signing",
    "nightly-l10n",
    "partials-signing",
    "partials",
    "repackage-l10n",
    "repackage-signing",
    "update-verify",
    "",
];

/// First category whose label is a substring of `name`. Total: the
/// catch-all guarantees every name gets exactly one category.
pub fn categorize(name: &str) -> &'static str {
    for label in TASK_CATEGORIES {
        if name.contains(label) {
            return label;
        }
    }
    unreachable!("catch-all category matches every name")
}
