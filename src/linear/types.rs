// SPDX-License-Identifier: Apache-2.0

//! Response types for the Linear GraphQL API.

use serde::Deserialize;

/// A team in the Linear workspace.
///
/// Ephemeral - fetched fresh each run to resolve the destination of
/// created issues.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    /// Team identifier (UUID).
    pub id: String,
    /// Team display name.
    pub name: String,
}

/// Teams connection from the GraphQL response.
#[derive(Debug, Deserialize)]
pub struct TeamConnection {
    /// List of team nodes.
    pub nodes: Vec<Team>,
}

/// `data` payload of the teams query.
#[derive(Debug, Deserialize)]
pub struct TeamsData {
    /// Teams container.
    pub teams: TeamConnection,
}

/// `issueCreate` payload from the GraphQL response.
#[derive(Debug, Deserialize)]
pub struct IssueCreatePayload {
    /// Whether the mutation succeeded.
    pub success: bool,
    /// The created issue, when present.
    pub issue: Option<CreatedIssue>,
}

/// `data` payload of the issue creation mutation.
#[derive(Debug, Deserialize)]
pub struct IssueCreateData {
    /// Mutation payload.
    #[serde(rename = "issueCreate")]
    pub issue_create: IssueCreatePayload,
}

/// A created Linear issue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    /// Human-readable identifier (e.g., "ENG-42").
    pub identifier: String,
    /// URL of the issue.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teams_data_parsing() {
        let json = r#"{
            "teams": {
                "nodes": [
                    {"id": "team-uuid-1", "name": "Engineering"},
                    {"id": "team-uuid-2", "name": "Design"}
                ]
            }
        }"#;

        let parsed: TeamsData = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.teams.nodes.len(), 2);
        assert_eq!(parsed.teams.nodes[0].name, "Engineering");
    }

    #[test]
    fn test_issue_create_data_parsing() {
        let json = r#"{
            "issueCreate": {
                "success": true,
                "issue": {"identifier": "ENG-42", "url": "https://linear.app/x/issue/ENG-42"}
            }
        }"#;

        let parsed: IssueCreateData = serde_json::from_str(json).expect("deserialize");
        assert!(parsed.issue_create.success);
        assert_eq!(
            parsed.issue_create.issue.expect("issue").identifier,
            "ENG-42"
        );
    }

    #[test]
    fn test_issue_create_without_issue_node() {
        let json = r#"{"issueCreate": {"success": false, "issue": null}}"#;

        let parsed: IssueCreateData = serde_json::from_str(json).expect("deserialize");
        assert!(!parsed.issue_create.success);
        assert!(parsed.issue_create.issue.is_none());
    }
}
