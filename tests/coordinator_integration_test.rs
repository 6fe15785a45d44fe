use async_trait::async_trait;
use solid_showcase::{
    Coordinator, DataPresenter, DataProvider, ProviderError, Record, Result, SampleProvider,
    ShowcaseError, WriterPresenter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Provider stub that counts calls and remembers what it was asked to save.
#[derive(Default)]
struct StubProvider {
    fetches: AtomicUsize,
    saved: Mutex<Vec<Record>>,
}

#[async_trait]
impl DataProvider for StubProvider {
    async fn fetch(&self) -> Result<Record> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(Record::new("Ann", "ann@x.io"))
    }

    async fn save(&self, record: &Record) -> Result<()> {
        self.saved.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingPresenter {
    seen: Arc<Mutex<Vec<Record>>>,
}

impl DataPresenter for RecordingPresenter {
    fn display(&self, record: &Record) {
        self.seen.lock().unwrap().push(record.clone());
    }
}

struct DownProvider;

#[async_trait]
impl DataProvider for DownProvider {
    async fn fetch(&self) -> Result<Record> {
        Err(ProviderError::Unavailable {
            reason: "maintenance".to_string(),
        }
        .into())
    }

    async fn save(&self, _record: &Record) -> Result<()> {
        Err(ProviderError::Unavailable {
            reason: "maintenance".to_string(),
        }
        .into())
    }
}

#[tokio::test]
async fn test_stub_record_reaches_presenter_once() {
    let presenter = RecordingPresenter::default();
    let seen = presenter.seen.clone();
    let coordinator = Coordinator::new(StubProvider::default(), presenter);

    coordinator.initialize().await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![Record::new("Ann", "ann@x.io")]);
    assert_eq!(coordinator.provider().fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_persist_does_not_touch_presenter() {
    let presenter = RecordingPresenter::default();
    let seen = presenter.seen.clone();
    let coordinator = Coordinator::new(StubProvider::default(), presenter);
    let record = Record::new("Bob", "bob@y.io");

    coordinator.persist(&record).await.unwrap();

    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(*coordinator.provider().saved.lock().unwrap(), vec![record]);
    assert_eq!(coordinator.provider().fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_repeated_initialize_does_not_cache() {
    let coordinator = Coordinator::new(StubProvider::default(), RecordingPresenter::default());

    coordinator.initialize().await.unwrap();
    coordinator.initialize().await.unwrap();

    assert_eq!(coordinator.provider().fetches.load(Ordering::SeqCst), 2);
    assert_eq!(coordinator.presenter().seen.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_sample_provider_with_writer_presenter() {
    let mut buf: Vec<u8> = Vec::new();
    {
        let coordinator = Coordinator::new(
            SampleProvider::new(Record::new("Ann", "ann@x.io"), Duration::from_millis(1)),
            WriterPresenter::new(&mut buf),
        );

        coordinator.initialize().await.unwrap();
        coordinator
            .persist(&Record::new("Ann", "ann@x.io"))
            .await
            .unwrap();
    }

    // persist 不應該再輸出任何內容
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Name ===> Ann\nContact ===> ann@x.io\n"
    );
}

#[tokio::test]
async fn test_provider_failure_reaches_caller() {
    let presenter = RecordingPresenter::default();
    let seen = presenter.seen.clone();
    let coordinator = Coordinator::new(DownProvider, presenter);

    let fetch_err = coordinator.initialize().await.unwrap_err();
    let save_err = coordinator.persist(&Record::sample()).await.unwrap_err();

    for err in [fetch_err, save_err] {
        match err {
            ShowcaseError::Provider(ProviderError::Unavailable { reason }) => {
                assert_eq!(reason, "maintenance")
            }
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }
    assert!(seen.lock().unwrap().is_empty());
}
