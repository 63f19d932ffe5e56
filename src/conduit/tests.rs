//! Unit tests driving the Conduit facades through a mock gateway.

use chrono::DateTime;
use mockall::predicate::always;
use rstest::rstest;

use super::{
    ActivityFeed, Cursor, MockConduitGateway, ReportError, RevisionFilter, RevisionPage,
    RevisionRecord, UserDirectory, UserPhid, UserProfile, Username,
};

fn revision(id: u64, timestamp: i64) -> RevisionRecord {
    RevisionRecord {
        id,
        phid: format!("PHID-DREV-{id}"),
        created_at: DateTime::from_timestamp(timestamp, 0).expect("timestamp should be in range"),
    }
}

fn page(ids: &[u64], next_cursor: Option<&str>) -> RevisionPage {
    RevisionPage {
        revisions: ids.iter().map(|&id| revision(id, 1_700_000_000)).collect(),
        next_cursor: next_cursor.map(Cursor::new),
    }
}

#[rstest]
#[tokio::test]
async fn authored_feed_concatenates_pages_in_server_order() {
    let mut gateway = MockConduitGateway::new();
    gateway
        .expect_search_revisions()
        .times(3)
        .returning(|_, cursor| match cursor.as_str() {
            "0" => Ok(page(&[1, 2], Some("A"))),
            "A" => Ok(page(&[3], Some("B"))),
            "B" => Ok(page(&[4], None)),
            other => Err(ReportError::Api {
                message: format!("unexpected cursor {other}"),
            }),
        });

    let feed = ActivityFeed::new(&gateway);
    let revisions = feed
        .authored_by(&UserPhid::new("PHID-USER-1"))
        .await
        .expect("pagination should succeed");

    let ids: Vec<u64> = revisions.iter().map(|rev| rev.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4], "pages should concatenate in order");
}

#[rstest]
#[tokio::test]
async fn authored_feed_constrains_on_the_author_field() {
    let mut gateway = MockConduitGateway::new();
    gateway
        .expect_search_revisions()
        .withf(|filter, cursor| {
            matches!(filter, RevisionFilter::AuthoredBy(phid) if phid.as_str() == "PHID-USER-7")
                && cursor.as_str() == "0"
        })
        .times(1)
        .returning(|_, _| Ok(page(&[], None)));

    let feed = ActivityFeed::new(&gateway);
    let revisions = feed
        .authored_by(&UserPhid::new("PHID-USER-7"))
        .await
        .expect("empty result should succeed");
    assert!(revisions.is_empty(), "no revisions expected");
}

#[rstest]
#[tokio::test]
async fn review_feed_constrains_on_the_reviewer_field() {
    let mut gateway = MockConduitGateway::new();
    gateway
        .expect_search_revisions()
        .withf(|filter, _| {
            matches!(filter, RevisionFilter::ReviewedBy(phid) if phid.as_str() == "PHID-USER-7")
        })
        .times(1)
        .returning(|_, _| Ok(page(&[9], None)));

    let feed = ActivityFeed::new(&gateway);
    let revisions = feed
        .reviewed_by(&UserPhid::new("PHID-USER-7"))
        .await
        .expect("single page should succeed");
    assert_eq!(revisions.len(), 1, "single revision expected");
}

#[rstest]
#[tokio::test]
async fn feed_propagates_gateway_failures() {
    let mut gateway = MockConduitGateway::new();
    gateway
        .expect_search_revisions()
        .with(always(), always())
        .times(1)
        .returning(|_, _| {
            Err(ReportError::Network {
                message: "connection reset".to_owned(),
            })
        });

    let feed = ActivityFeed::new(&gateway);
    let result = feed.authored_by(&UserPhid::new("PHID-USER-1")).await;
    assert!(
        matches!(result, Err(ReportError::Network { .. })),
        "expected Network error, got {result:?}"
    );
}

#[rstest]
#[tokio::test]
async fn directory_resolves_first_match() {
    let mut gateway = MockConduitGateway::new();
    gateway
        .expect_search_users()
        .withf(|username| username.as_str() == "alice")
        .times(1)
        .returning(|_| {
            Ok(vec![
                UserProfile {
                    phid: UserPhid::new("PHID-USER-alice"),
                    username: "alice".to_owned(),
                },
                UserProfile {
                    phid: UserPhid::new("PHID-USER-alice2"),
                    username: "alice2".to_owned(),
                },
            ])
        });

    let directory = UserDirectory::new(&gateway);
    let username = Username::new("alice").expect("username should be accepted");
    let phid = directory
        .resolve_by_username(&username)
        .await
        .expect("lookup should succeed");
    assert_eq!(
        phid.as_ref().map(UserPhid::as_str),
        Some("PHID-USER-alice"),
        "first match should win"
    );
}

#[rstest]
#[tokio::test]
async fn directory_returns_none_for_unknown_username() {
    let mut gateway = MockConduitGateway::new();
    gateway
        .expect_search_users()
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let directory = UserDirectory::new(&gateway);
    let username = Username::new("nobody").expect("username should be accepted");
    let phid = directory
        .resolve_by_username(&username)
        .await
        .expect("lookup should succeed");
    assert!(phid.is_none(), "unknown username should resolve to None");
}

#[rstest]
#[tokio::test]
async fn directory_passes_whoami_through() {
    let mut gateway = MockConduitGateway::new();
    gateway.expect_whoami().times(1).returning(|| {
        Ok(UserProfile {
            phid: UserPhid::new("PHID-USER-self"),
            username: "bob".to_owned(),
        })
    });

    let directory = UserDirectory::new(&gateway);
    let profile = directory
        .current_user()
        .await
        .expect("whoami should succeed");
    assert_eq!(profile.username, "bob", "username mismatch");
    assert_eq!(profile.phid.as_str(), "PHID-USER-self", "phid mismatch");
}
