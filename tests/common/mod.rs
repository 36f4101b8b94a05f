use serde_json::{json, Value};

/// Owner object in the shape the repositories API returns it
pub fn owner_json(login: &str) -> Value {
    json!({
        "login": login,
        "id": 1,
        "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
        "gravatar_id": "",
        "url": format!("https://api.github.com/users/{}", login),
        "html_url": format!("https://github.com/{}", login),
        "followers_url": format!("https://api.github.com/users/{}/followers", login),
        "following_url": format!("https://api.github.com/users/{}/following{{/other_user}}", login),
        "gists_url": format!("https://api.github.com/users/{}/gists{{/gist_id}}", login),
        "starred_url": format!("https://api.github.com/users/{}/starred{{/owner}}{{/repo}}", login),
        "subscriptions_url": format!("https://api.github.com/users/{}/subscriptions", login),
        "organizations_url": format!("https://api.github.com/users/{}/orgs", login),
        "repos_url": format!("https://api.github.com/users/{}/repos", login),
        "events_url": format!("https://api.github.com/users/{}/events{{/privacy}}", login),
        "received_events_url": format!("https://api.github.com/users/{}/received_events", login),
        "type": "User",
        "site_admin": false
    })
}

/// Full repository document for `owner/name`
pub fn repo_json(owner: &str, name: &str) -> Value {
    let api = format!("https://api.github.com/repos/{}/{}", owner, name);
    json!({
        "id": 1296269,
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "owner": owner_json(owner),
        "private": false,
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "description": "This your first repo!",
        "fork": false,
        "url": api,
        "archive_url": format!("{}/{{archive_format}}{{/ref}}", api),
        "assignees_url": format!("{}/assignees{{/user}}", api),
        "blobs_url": format!("{}/git/blobs{{/sha}}", api),
        "branches_url": format!("{}/branches{{/branch}}", api),
        "collaborators_url": format!("{}/collaborators{{/collaborator}}", api),
        "comments_url": format!("{}/comments{{/number}}", api),
        "commits_url": format!("{}/commits{{/sha}}", api),
        "compare_url": format!("{}/compare/{{base}}...{{head}}", api),
        "contents_url": format!("{}/contents/{{+path}}", api),
        "contributors_url": format!("{}/contributors", api),
        "deployments_url": format!("{}/deployments", api),
        "downloads_url": format!("{}/downloads", api),
        "events_url": format!("{}/events", api),
        "forks_url": format!("{}/forks", api),
        "git_commits_url": format!("{}/git/commits{{/sha}}", api),
        "git_refs_url": format!("{}/git/refs{{/sha}}", api),
        "git_tags_url": format!("{}/git/tags{{/sha}}", api),
        "git_url": format!("git://github.com/{}/{}.git", owner, name),
        "issue_comment_url": format!("{}/issues/comments{{/number}}", api),
        "issue_events_url": format!("{}/issues/events{{/number}}", api),
        "issues_url": format!("{}/issues{{/number}}", api),
        "keys_url": format!("{}/keys{{/key_id}}", api),
        "labels_url": format!("{}/labels{{/name}}", api),
        "languages_url": format!("{}/languages", api),
        "merges_url": format!("{}/merges", api),
        "milestones_url": format!("{}/milestones{{/number}}", api),
        "notifications_url": format!("{}/notifications{{?since,all,participating}}", api),
        "pulls_url": format!("{}/pulls{{/number}}", api),
        "releases_url": format!("{}/releases{{/id}}", api),
        "ssh_url": format!("git@github.com:{}/{}.git", owner, name),
        "stargazers_url": format!("{}/stargazers", api),
        "statuses_url": format!("{}/statuses/{{sha}}", api),
        "subscribers_url": format!("{}/subscribers", api),
        "subscription_url": format!("{}/subscription", api),
        "tags_url": format!("{}/tags", api),
        "teams_url": format!("{}/teams", api),
        "trees_url": format!("{}/git/trees{{/sha}}", api),
        "hooks_url": format!("{}/hooks", api),
        "clone_url": format!("https://github.com/{}/{}.git", owner, name),
        "mirror_url": null,
        "svn_url": format!("https://svn.github.com/{}/{}", owner, name),
        "homepage": "https://github.com",
        "language": null,
        "forks_count": 9,
        "forks": 9,
        "stargazers_count": 80,
        "watchers_count": 80,
        "watchers": 80,
        "size": 108,
        "default_branch": "master",
        "open_issues_count": 0,
        "open_issues": 0,
        "has_issues": true,
        "has_projects": true,
        "has_wiki": true,
        "has_pages": false,
        "has_downloads": true,
        "pushed_at": "2011-01-26T19:06:43Z",
        "created_at": "2011-01-26T19:01:12Z",
        "updated_at": "2011-01-26T19:14:43Z",
        "permissions": {
            "admin": false,
            "push": false,
            "pull": true
        },
        "topics": ["octocat", "atom"],
        "visibility": "public"
    })
}
