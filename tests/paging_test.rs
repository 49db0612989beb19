use serde_json::{Value, json};
use spotify_model::model::{PageItem, Playlist, ResourceType};
use spotify_model::paging::Page;

#[test]
fn test_default_page() {
    let page = Page::default();
    assert_eq!(page.limit, 50);
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
    assert!(!page.has_next());
    assert!(!page.has_previous());
    assert_eq!(page.to_string(), "PagedItems[0/50 of 0]");
}

#[test]
fn test_page_from_bag_copies_cursor_fields() {
    let page = Page::from_bag(&json!({
        "href": "https://api.spotify.com/v1/albums/2/tracks?offset=10&limit=10",
        "items": [],
        "limit": 10,
        "next": "https://api.spotify.com/v1/albums/2/tracks?offset=20&limit=10",
        "offset": 10,
        "previous": "https://api.spotify.com/v1/albums/2/tracks?offset=0&limit=10",
        "total": 42,
    }))
    .unwrap();

    assert_eq!(page.limit, 10);
    assert_eq!(page.offset, 10);
    assert_eq!(page.total, 42);
    assert!(page.has_next());
    assert!(page.has_previous());

    // A present bag without a limit key decodes to 0, unlike the null bag.
    let bare = Page::from_bag(&json!({"total": 3})).unwrap();
    assert_eq!(bare.limit, 0);
    assert_eq!(bare.total, 3);

    // Wrong-shaped counters count as absent.
    let odd = Page::from_bag(&json!({"limit": "ten", "offset": -4})).unwrap();
    assert_eq!(odd.limit, 0);
    assert_eq!(odd.offset, 0);
}

#[test]
fn test_resolver_classification_order() {
    let page = Page::from_bag(&json!({
        "limit": 4,
        "total": 4,
        "items": [
            {"type": "track", "id": "t1", "name": "A"},
            {"type": "artist", "id": "art1", "name": "B"},
            {"added_at": "2014-08-18T20:16:08Z", "track": {"id": "t2"}},
            {"something": "else"},
        ],
    }))
    .unwrap();

    assert_eq!(page.items.len(), 4);
    assert!(matches!(page.items[0], PageItem::Track(_)));
    assert!(matches!(page.items[1], PageItem::Artist(_)));
    assert!(matches!(page.items[2], PageItem::PlaylistTrack(_)));
    assert!(matches!(page.items[3], PageItem::Raw(_)));

    // kind() reports the discriminator only for addressable entities.
    assert_eq!(page.items[0].kind(), Some(ResourceType::Track));
    assert_eq!(page.items[1].kind(), Some(ResourceType::Artist));
    assert_eq!(page.items[2].kind(), None);
    assert_eq!(page.items[3].kind(), None);
}

#[test]
fn test_resolver_tolerates_unknown_discriminators() {
    // An unrecognized type string falls through to the wrapper check and
    // then to raw passthrough instead of erroring.
    let item = PageItem::resolve(&json!({"type": "episode", "id": "e1"})).unwrap();
    assert!(matches!(item, PageItem::Raw(_)));

    // Upper-cased discriminators still match.
    let upper = PageItem::resolve(&json!({"type": "Track", "id": "t1"})).unwrap();
    assert!(matches!(upper, PageItem::Track(_)));

    // A null added_at still marks the relationship wrapper: the key is
    // present even though the value carries nothing.
    let wrapper = PageItem::resolve(&json!({"added_at": null, "track": {"id": "t1"}})).unwrap();
    match wrapper {
        PageItem::PlaylistTrack(entry) => {
            assert!(entry.added_at.is_none());
            assert_eq!(entry.track.id, "t1");
        }
        other => panic!("expected a playlist track, got {:?}", other),
    }
}

#[test]
fn test_resolver_preserves_server_order() {
    let page = Page::from_bag(&json!({
        "items": [
            {"type": "track", "id": "t3"},
            {"type": "track", "id": "t1"},
            {"type": "track", "id": "t2"},
        ],
    }))
    .unwrap();

    let ids: Vec<&str> = page
        .items
        .iter()
        .map(|item| match item {
            PageItem::Track(track) => track.id.as_str(),
            other => panic!("expected a track, got {:?}", other),
        })
        .collect();
    assert_eq!(ids, vec!["t3", "t1", "t2"]);
}

#[test]
fn test_out_of_range_item_fails_the_page() {
    let result = Page::from_bag(&json!({
        "items": [{"type": "artist", "id": "art1", "popularity": 300}],
    }));
    assert!(result.is_err());
}

#[test]
fn test_multi_collection_envelope() {
    let envelope = json!({
        "tracks": {
            "limit": 1,
            "total": 5,
            "items": [{"type": "track", "id": "t1", "name": "A"}],
        },
        "artists": {
            "limit": 1,
            "total": 2,
            "items": [{"type": "artist", "id": "art1", "name": "B"}],
        },
    });

    // Selecting a kind equals decoding its sub-bag directly.
    let tracks = Page::from_search(&envelope, ResourceType::Track).unwrap();
    assert_eq!(tracks, Page::from_bag(&envelope["tracks"]).unwrap());
    assert_eq!(tracks.total, 5);
    assert_eq!(tracks.items.len(), 1);

    let artists = Page::from_search(&envelope, ResourceType::Artist).unwrap();
    assert_eq!(artists.total, 2);

    // A kind the envelope does not carry yields the all-default page.
    let playlists = Page::from_search(&envelope, ResourceType::Playlist).unwrap();
    assert_eq!(playlists, Page::default());

    // So does a null envelope.
    let none = Page::from_search(&Value::Null, ResourceType::Track).unwrap();
    assert_eq!(none, Page::default());
}

#[test]
fn test_playlist_embeds_wrapped_tracks() {
    let playlist = Playlist::from_bag(&json!({
        "collaborative": false,
        "id": "p1",
        "name": "road trip",
        "owner": {"id": "someone", "display_name": "Someone"},
        "public": null,
        "snapshot_id": "snap1",
        "tracks": {
            "limit": 100,
            "total": 2,
            "items": [
                {
                    "added_at": "2014-08-18T20:16:08Z",
                    "added_by": {"id": "someone"},
                    "is_local": false,
                    "track": {"type": "track", "id": "t1", "name": "A"},
                },
                {
                    "added_at": "2015-01-02T03:04:05Z",
                    "added_by": {"id": "someone-else"},
                    "is_local": true,
                    "track": {"type": "track", "id": "t2", "name": "B"},
                },
            ],
        },
        "uri": "spotify:playlist:p1",
    }))
    .unwrap();

    // A JSON null public flag is the unspecified visibility state.
    assert_eq!(playlist.public, None);
    assert_eq!(playlist.track_count(), 2);

    let entries = playlist.track_list();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].track.name, "A");
    assert_eq!(entries[0].added_by.id, "someone");
    assert!(entries[1].is_local);

    let visible = Playlist::from_bag(&json!({"id": "p2", "public": true})).unwrap();
    assert_eq!(visible.public, Some(true));
}

#[test]
fn test_plural_lookup_names() {
    assert_eq!(ResourceType::Album.plural(), "albums");
    assert_eq!(ResourceType::Artist.plural(), "artists");
    assert_eq!(ResourceType::Playlist.plural(), "playlists");
    assert_eq!(ResourceType::Track.plural(), "tracks");
    assert_eq!(ResourceType::User.plural(), "users");
}
