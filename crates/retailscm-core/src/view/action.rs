// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Actions and their URLs.

/// Builds the URL an action links to.
pub trait ActionUrlBuilder: Send + Sync {
    /// URL of `code` on `processor`.
    fn action_url(&self, processor: &str, code: &str) -> String;
}

/// `"{processor}/{code}/"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessorUrls;

impl ActionUrlBuilder for ProcessorUrls {
    fn action_url(&self, processor: &str, code: &str) -> String {
        format!("{processor}/{code}/")
    }
}

/// Split `"Title:code"` into title and code. An action without `:` is both.
pub fn split_action(action: &str) -> (&str, &str) {
    let mut parts = action.split(':');
    let title = parts.next().unwrap_or(action);
    let code = parts.next().unwrap_or(title);
    (title, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_code() {
        assert_eq!(split_action("Edit:edit"), ("Edit", "edit"));
        assert_eq!(split_action("delete"), ("delete", "delete"));
    }

    #[test]
    fn extra_segments_are_ignored() {
        assert_eq!(split_action("Go:go:now"), ("Go", "go"));
    }

    #[test]
    fn processor_url() {
        assert_eq!(
            ProcessorUrls.action_url("stockCountIssueTrackManager", "edit"),
            "stockCountIssueTrackManager/edit/"
        );
    }
}
