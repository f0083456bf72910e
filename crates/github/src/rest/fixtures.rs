//! Response bodies shaped like the platform's, for decoding tests.

use serde_json::{json, Value};

const API: &str = "https://api.github.com";
const TIMESTAMP: &str = "2011-04-14T16:00:49Z";

pub(crate) fn user(login: &str, id: u64) -> Value {
    let url = format!("{API}/users/{login}");
    json!({
        "login": login,
        "id": id,
        "node_id": "MDQ6VXNlcjE=",
        "avatar_url": "https://github.com/images/error/octocat_happy.gif",
        "gravatar_id": "",
        "url": url,
        "html_url": format!("https://github.com/{login}"),
        "followers_url": format!("{url}/followers"),
        "following_url": format!("{url}/following{{/other_user}}"),
        "gists_url": format!("{url}/gists{{/gist_id}}"),
        "starred_url": format!("{url}/starred{{/owner}}{{/repo}}"),
        "subscriptions_url": format!("{url}/subscriptions"),
        "organizations_url": format!("{url}/orgs"),
        "repos_url": format!("{url}/repos"),
        "events_url": format!("{url}/events{{/privacy}}"),
        "received_events_url": format!("{url}/received_events"),
        "type": "User",
        "site_admin": false,
    })
}

pub(crate) fn repository(owner: &str, name: &str) -> Value {
    json!({
        "id": 1296269,
        "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "owner": user(owner, 1),
        "private": false,
        "html_url": format!("https://github.com/{owner}/{name}"),
        "description": "This your first repo!",
        "fork": false,
        "url": format!("{API}/repos/{owner}/{name}"),
        "default_branch": "main",
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
        "pushed_at": TIMESTAMP,
    })
}

pub(crate) fn label(name: &str, id: u64) -> Value {
    json!({
        "id": id,
        "node_id": "MDU6TGFiZWwyMDgwNDU5NDY=",
        "url": format!("{API}/repos/octocat/hello-world/labels/{name}"),
        "name": name,
        "description": null,
        "color": "f29513",
        "default": false,
    })
}

pub(crate) fn issue(number: u64, title: &str) -> Value {
    let url = format!("{API}/repos/octocat/hello-world/issues/{number}");
    json!({
        "id": 1,
        "node_id": "MDU6SXNzdWUx",
        "url": url,
        "repository_url": format!("{API}/repos/octocat/hello-world"),
        "labels_url": format!("{url}/labels{{/name}}"),
        "comments_url": format!("{url}/comments"),
        "events_url": format!("{url}/events"),
        "html_url": format!("https://github.com/octocat/hello-world/issues/{number}"),
        "number": number,
        "state": "open",
        "title": title,
        "body": "I'm having a problem with this.",
        "user": user("octocat", 1),
        "labels": [label("bug", 208045946)],
        "assignee": null,
        "assignees": [],
        "milestone": null,
        "locked": false,
        "active_lock_reason": null,
        "comments": 0,
        "closed_at": null,
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
        "author_association": "OWNER",
    })
}

pub(crate) fn comment(id: u64, issue_number: u64, body: &str) -> Value {
    json!({
        "id": id,
        "node_id": "MDEyOklzc3VlQ29tbWVudDE=",
        "url": format!("{API}/repos/octocat/hello-world/issues/comments/{id}"),
        "html_url": format!(
            "https://github.com/octocat/hello-world/issues/{issue_number}#issuecomment-{id}"
        ),
        "issue_url": format!("{API}/repos/octocat/hello-world/issues/{issue_number}"),
        "body": body,
        "user": user("octocat", 1),
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
        "author_association": "OWNER",
    })
}

pub(crate) fn commit(sha: &str, message: &str) -> Value {
    let signature = json!({
        "name": "Monalisa Octocat",
        "email": "support@github.com",
        "date": TIMESTAMP,
    });
    json!({
        "url": format!("{API}/repos/octocat/hello-world/commits/{sha}"),
        "sha": sha,
        "node_id": "MDY6Q29tbWl0NmRjYjA5YjViNTc4NzVmMzM0ZjYxYWViZWQ2OTVlMmU0MTkzZGI1ZQ==",
        "html_url": format!("https://github.com/octocat/hello-world/commit/{sha}"),
        "comments_url": format!("{API}/repos/octocat/hello-world/commits/{sha}/comments"),
        "commit": {
            "url": format!("{API}/repos/octocat/hello-world/git/commits/{sha}"),
            "author": signature,
            "committer": signature,
            "message": message,
            "tree": {
                "url": format!("{API}/repos/octocat/hello-world/tree/{sha}"),
                "sha": sha,
            },
            "comment_count": 0,
            "verification": {
                "verified": false,
                "reason": "unsigned",
                "signature": null,
                "payload": null,
            },
        },
        "author": user("octocat", 1),
        "committer": user("octocat", 1),
        "parents": [],
    })
}

pub(crate) fn pull_request(number: u64, title: &str) -> Value {
    let branch = |label: &str, git_ref: &str| {
        json!({
            "label": label,
            "ref": git_ref,
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "user": user("octocat", 1),
            "repo": repository("octocat", "hello-world"),
        })
    };
    json!({
        "url": format!("{API}/repos/octocat/hello-world/pulls/{number}"),
        "id": 1,
        "node_id": "MDExOlB1bGxSZXF1ZXN0MQ==",
        "html_url": format!("https://github.com/octocat/hello-world/pull/{number}"),
        "number": number,
        "state": "open",
        "locked": false,
        "title": title,
        "user": user("octocat", 1),
        "body": "Please pull these awesome changes in!",
        "labels": [],
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
        "closed_at": null,
        "merged_at": null,
        "merge_commit_sha": "e5bd3914e2e596debea16f433f57875b5b90bcd6",
        "assignees": [],
        "requested_reviewers": [],
        "head": branch("octocat:new-topic", "new-topic"),
        "base": branch("octocat:main", "main"),
        "author_association": "OWNER",
        "draft": false,
    })
}

pub(crate) fn workflow_run(id: u64, run_number: u64) -> Value {
    let url = format!("{API}/repos/octocat/hello-world/actions/runs/{id}");
    let author = json!({ "name": "Octo Cat", "email": "octocat@github.com" });
    json!({
        "id": id,
        "name": "Build",
        "node_id": "MDEyOldvcmtmbG93IFJ1bjI2OTI4OQ==",
        "check_suite_id": 42,
        "check_suite_node_id": "MDEwOkNoZWNrU3VpdGU0Mg==",
        "head_branch": "main",
        "head_sha": "acb5820ced9479c074f688cc328bf03f341a511d",
        "path": ".github/workflows/build.yml@main",
        "run_number": run_number,
        "event": "push",
        "display_title": "Update README.md",
        "status": "completed",
        "conclusion": "success",
        "workflow_id": 159038,
        "url": url,
        "html_url": format!("https://github.com/octocat/hello-world/actions/runs/{id}"),
        "pull_requests": [],
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
        "actor": user("octocat", 1),
        "run_attempt": 1,
        "run_started_at": TIMESTAMP,
        "triggering_actor": user("octocat", 1),
        "jobs_url": format!("{url}/jobs"),
        "logs_url": format!("{url}/logs"),
        "check_suite_url": format!("{API}/repos/octocat/hello-world/check-suites/42"),
        "artifacts_url": format!("{url}/artifacts"),
        "cancel_url": format!("{url}/cancel"),
        "rerun_url": format!("{url}/rerun"),
        "previous_attempt_url": null,
        "workflow_url": format!("{API}/repos/octocat/hello-world/actions/workflows/159038"),
        "head_commit": {
            "id": "acb5820ced9479c074f688cc328bf03f341a511d",
            "tree_id": "d23f6eedb1e1b9610bbc754ddb5197bfe7271223",
            "message": "Create linter.yaml",
            "timestamp": TIMESTAMP,
            "author": author,
            "committer": author,
        },
        "repository": repository("octocat", "hello-world"),
        "head_repository": repository("octocat", "hello-world"),
    })
}
