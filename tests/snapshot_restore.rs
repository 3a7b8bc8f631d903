use rolodex::{
    contact::ContactDraft,
    directory::{ContactDirectory, DirectoryError, DirectorySnapshotV1},
    types::NameKey,
};

fn draft(name: &str, phone: &str) -> ContactDraft {
    ContactDraft {
        name: name.to_string(),
        phone_number: phone.to_string(),
    }
}

#[test]
fn restore_preserves_contents_and_keeps_ids_fresh() {
    let mut dir = ContactDirectory::new();
    let bob = dir.add(draft("Bob", "111")).unwrap();
    dir.add(draft("alice", "222")).unwrap();
    dir.record_call(bob, "Call to Bob, Duration: 5 minutes").unwrap();

    let snapshot = dir.export_snapshot();

    // Through JSON, as a caller persisting the value would.
    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: DirectorySnapshotV1 = serde_json::from_str(&json).unwrap();

    let mut restored = ContactDirectory::from_snapshot(decoded).unwrap();
    assert_eq!(restored.contacts_cloned(), dir.contacts_cloned());

    let cara = restored.add(draft("Cara", "333")).unwrap();
    assert!(cara > bob);
    assert_eq!(restored.len(), 3);
}

#[test]
fn restore_rejects_colliding_names() {
    let mut dir = ContactDirectory::new();
    dir.add(draft("Ann", "1")).unwrap();
    let mut snapshot = dir.export_snapshot();

    let mut dupe = snapshot.contacts[0].clone();
    dupe.id = 42;
    dupe.name = "ANN".to_string();
    snapshot.contacts.push(dupe);

    let err = ContactDirectory::from_snapshot(snapshot).unwrap_err();
    assert_eq!(err, DirectoryError::DuplicateName(NameKey::new("ann")));
}
