//! Owner shares a checklist, a friend joins, the owner deletes it

use listo_cache::MemoryCache;
use listo_config::SigningSecret;
use listo_core::{Error, Result, UserId};
use listo_sharing::{CollaboratorAccess, SharingService, ShortCodeCache, TokenCodec};
use listo_store::{ChecklistRepository, MemoryStore, NewChecklist, SharedStore, Table};
use std::sync::Arc;
use std::time::Duration;

const VALIDITY: Duration = Duration::from_secs(12 * 60 * 60);

struct World {
    memory: MemoryStore,
    checklists: ChecklistRepository,
    access: CollaboratorAccess,
    sharing: SharingService,
}

fn world() -> World {
    let memory = MemoryStore::new();
    let store: SharedStore = Arc::new(memory.clone());
    let secret = SigningSecret::from_bytes(&b"collaboration-test-secret-012345"[..]).unwrap();
    let sharing = SharingService::new(
        TokenCodec::new(&secret, VALIDITY),
        ShortCodeCache::new(Arc::new(MemoryCache::new()), VALIDITY),
    )
    .unwrap();

    World {
        memory,
        checklists: ChecklistRepository::new(store.clone()),
        access: CollaboratorAccess::new(store),
        sharing,
    }
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

#[tokio::test]
async fn share_join_and_cascade_on_delete() -> Result<()> {
    let w = world();
    let (u1, u2) = (user("auth0|u1"), user("auth0|u2"));
    let c1 = w
        .checklists
        .create(
            &u1,
            NewChecklist {
                title: "Road trip".into(),
                locked: false,
            },
        )
        .await?;

    let code = w.sharing.issue(&c1.id, &u1).await?;
    let redemption = w.sharing.redeem(code.as_str(), &u2).await?;
    w.access.join(&redemption, &u2).await?;

    let owner = w.access.resolve_owner(&u2, &c1.id).await?;
    assert_eq!(owner, u1);
    let seen = w.checklists.get(&owner, &c1.id).await?;
    assert_eq!(seen.title, "Road trip");

    w.checklists.delete(&u1, &c1.id).await?;
    assert!(matches!(
        w.access.resolve_owner(&u2, &c1.id).await,
        Err(Error::NotACollaborator { .. })
    ));
    assert_eq!(w.memory.count(Table::ChecklistCollaborators), 0);
    Ok(())
}

#[tokio::test]
async fn self_share_writes_nothing() -> Result<()> {
    let w = world();
    let u1 = user("auth0|u1");
    let c1 = w
        .checklists
        .create(
            &u1,
            NewChecklist {
                title: "Mine".into(),
                locked: false,
            },
        )
        .await?;

    let code = w.sharing.issue(&c1.id, &u1).await?;
    assert!(matches!(
        w.sharing.redeem(code.as_str(), &u1).await,
        Err(Error::SelfShare)
    ));
    assert_eq!(w.memory.count(Table::ChecklistCollaborators), 0);
    Ok(())
}

#[tokio::test]
async fn shared_operations_run_in_the_owners_partition() -> Result<()> {
    let w = world();
    let (u1, u2) = (user("auth0|u1"), user("auth0|u2"));
    let c1 = w
        .checklists
        .create(
            &u1,
            NewChecklist {
                title: "Groceries".into(),
                locked: false,
            },
        )
        .await?;
    let code = w.sharing.issue(&c1.id, &u1).await?;
    let redemption = w.sharing.redeem(code.as_str(), &u2).await?;
    w.access.join(&redemption, &u2).await?;

    let owner = w.access.resolve_owner(&u2, &c1.id).await?;
    w.checklists
        .create_item(
            &owner,
            &c1.id,
            listo_store::NewItem {
                content: "milk".into(),
                ordering: 0,
            },
        )
        .await?;

    assert_eq!(w.checklists.items(&u1, &c1.id).await?.len(), 1);
    assert!(w.checklists.list(&u2).await?.is_empty());
    assert_eq!(w.access.shared_checklists(&u2).await?.len(), 1);
    Ok(())
}
