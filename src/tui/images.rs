//! # Image Board
//!
//! Per-view image state for the items currently on screen.
//!
//! After every draw the event loop calls [`ImageBoard::sync`] with the item
//! ids whose images were visible. Newly visible ids get a fetch spawned on
//! the tokio runtime. Ids that left the view have their fetch aborted and
//! their state dropped, so nothing outlives the view that asked for it.
//!
//! Results come back over an mpsc channel and are applied by
//! [`ImageBoard::drain`] on the event-loop thread. A generation counter
//! discards results from fetches that were aborted and restarted.

use std::collections::HashMap;
use std::sync::{Arc, mpsc};

use log::{debug, warn};
use tokio::task::AbortHandle;

use crate::core::catalog::{Catalog, ItemId};
use crate::images::{ImageFetcher, ImageLoadError, Thumbnail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    Loading,
    Ready(Thumbnail),
    Failed(String),
}

/// A finished fetch, sent back to the event loop.
pub struct ImageUpdate {
    pub item_id: ItemId,
    pub generation: u64,
    pub result: Result<Thumbnail, ImageLoadError>,
}

static LOADING: ImageState = ImageState::Loading;

struct Slot {
    state: ImageState,
    generation: u64,
    abort: Option<AbortHandle>,
}

pub struct ImageBoard {
    /// `None` when images are disabled.
    fetcher: Option<Arc<dyn ImageFetcher>>,
    slots: HashMap<ItemId, Slot>,
    next_generation: u64,
    tx: mpsc::Sender<ImageUpdate>,
    rx: mpsc::Receiver<ImageUpdate>,
}

impl ImageBoard {
    pub fn new(fetcher: Option<Arc<dyn ImageFetcher>>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            fetcher,
            slots: HashMap::new(),
            next_generation: 0,
            tx,
            rx,
        }
    }

    pub fn enabled(&self) -> bool {
        self.fetcher.is_some()
    }

    /// State for a visible item. `Loading` until its fetch reports back.
    pub fn state(&self, item_id: ItemId) -> &ImageState {
        self.slots
            .get(&item_id)
            .map(|slot| &slot.state)
            .unwrap_or(&LOADING)
    }

    pub fn is_loading(&self) -> bool {
        self.slots
            .values()
            .any(|slot| slot.state == ImageState::Loading)
    }

    /// Start fetches for newly visible items and tear down the rest.
    pub fn sync(&mut self, visible: &[ItemId], catalog: &Catalog) {
        let Some(fetcher) = self.fetcher.clone() else {
            return;
        };

        self.slots.retain(|item_id, slot| {
            let keep = visible.contains(item_id);
            if !keep {
                if let Some(handle) = slot.abort.take() {
                    debug!("Cancelling image fetch for item {}", item_id);
                    handle.abort();
                }
            }
            keep
        });

        for &item_id in visible {
            if self.slots.contains_key(&item_id) {
                continue;
            }
            // Missing items render a not-found page with no image.
            let Ok(item) = catalog.get(item_id) else {
                continue;
            };
            let generation = self.next_generation;
            self.next_generation += 1;
            let abort = spawn_fetch(
                fetcher.clone(),
                item_id,
                item.image_url.clone(),
                generation,
                self.tx.clone(),
            );
            self.slots.insert(
                item_id,
                Slot {
                    state: ImageState::Loading,
                    generation,
                    abort: Some(abort),
                },
            );
        }
    }

    /// Apply finished fetches. Returns true if any visible state changed.
    pub fn drain(&mut self) -> bool {
        let mut changed = false;
        while let Ok(update) = self.rx.try_recv() {
            changed |= self.apply(update);
        }
        changed
    }

    fn apply(&mut self, update: ImageUpdate) -> bool {
        let Some(slot) = self.slots.get_mut(&update.item_id) else {
            return false;
        };
        if slot.generation != update.generation {
            return false;
        }
        slot.abort = None;
        slot.state = match update.result {
            Ok(thumbnail) => ImageState::Ready(thumbnail),
            Err(e) => {
                warn!("Image for item {} failed: {}", update.item_id, e);
                ImageState::Failed(e.to_string())
            }
        };
        true
    }

    pub fn cancel_all(&mut self) {
        for slot in self.slots.values_mut() {
            if let Some(handle) = slot.abort.take() {
                handle.abort();
            }
        }
        self.slots.clear();
    }
}

impl Drop for ImageBoard {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

fn spawn_fetch(
    fetcher: Arc<dyn ImageFetcher>,
    item_id: ItemId,
    locator: String,
    generation: u64,
    tx: mpsc::Sender<ImageUpdate>,
) -> AbortHandle {
    debug!("Fetching image for item {} via {}", item_id, fetcher.name());
    let handle = tokio::spawn(async move {
        let result = fetcher.fetch(&locator).await;
        if tx
            .send(ImageUpdate {
                item_id,
                generation,
                result,
            })
            .is_err()
        {
            warn!("Failed to send image for item {}: receiver dropped", item_id);
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::solid_thumbnail;
    use async_trait::async_trait;
    use std::time::Duration;

    /// Fetcher that answers from the locator: "fail" fails, "slow" never finishes.
    struct ScriptedFetcher;

    #[async_trait]
    impl ImageFetcher for ScriptedFetcher {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn fetch(&self, locator: &str) -> Result<Thumbnail, ImageLoadError> {
            if locator.contains("slow") {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            if locator.contains("fail") {
                return Err(ImageLoadError::Http { status: 500 });
            }
            Ok(solid_thumbnail(2, 2, [9, 9, 9]))
        }
    }

    fn catalog_with(locators: &[&str]) -> Catalog {
        let mut items = Catalog::seed().all()[..locators.len()].to_vec();
        for (item, locator) in items.iter_mut().zip(locators) {
            item.image_url = locator.to_string();
        }
        Catalog::new(items).unwrap()
    }

    async fn drain_until_settled(board: &mut ImageBoard) {
        for _ in 0..100 {
            board.drain();
            if !board.is_loading() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn test_visible_items_load_or_fail() {
        let catalog = catalog_with(&["ok", "fail"]);
        let mut board = ImageBoard::new(Some(Arc::new(ScriptedFetcher)));

        board.sync(&[1, 2], &catalog);
        assert_eq!(board.state(1), &ImageState::Loading);
        drain_until_settled(&mut board).await;

        assert!(matches!(board.state(1), ImageState::Ready(_)));
        assert_eq!(board.state(2), &ImageState::Failed("HTTP 500".to_string()));
    }

    #[tokio::test]
    async fn test_hidden_items_are_cancelled() {
        let catalog = catalog_with(&["slow", "ok"]);
        let mut board = ImageBoard::new(Some(Arc::new(ScriptedFetcher)));

        board.sync(&[1], &catalog);
        assert!(board.is_loading());

        board.sync(&[2], &catalog);
        assert!(!board.slots.contains_key(&1));
        drain_until_settled(&mut board).await;
        assert!(matches!(board.state(2), ImageState::Ready(_)));
    }

    #[tokio::test]
    async fn test_stale_generation_is_ignored() {
        let catalog = catalog_with(&["ok"]);
        let mut board = ImageBoard::new(Some(Arc::new(ScriptedFetcher)));
        board.sync(&[1], &catalog);

        let applied = board.apply(ImageUpdate {
            item_id: 1,
            generation: 999,
            result: Err(ImageLoadError::Http { status: 404 }),
        });
        assert!(!applied);
        assert_ne!(board.state(1), &ImageState::Failed("HTTP 404".to_string()));
    }

    #[test]
    fn test_disabled_board_spawns_nothing() {
        let mut board = ImageBoard::new(None);
        board.sync(&[1, 2, 3], &Catalog::seed());
        assert!(!board.enabled());
        assert!(!board.is_loading());
    }

    #[tokio::test]
    async fn test_missing_items_are_skipped() {
        let mut board = ImageBoard::new(Some(Arc::new(ScriptedFetcher)));
        board.sync(&[11], &Catalog::seed());
        assert!(!board.is_loading());
    }
}
