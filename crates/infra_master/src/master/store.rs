//! In-memory bitemporal store.

use super::{Document, HistoryRequest, MasterRecord, SearchRequest};
use crate::error::MasterError;
use crate::id::{ObjectId, UniqueId, VersionCorrection};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};
use tracing::debug;

/// Monotonic wall-clock source.
///
/// Consecutive reads that land on the same wall-clock instant are bumped
/// by one microsecond so bitemporal intervals never collapse.
#[derive(Debug)]
struct InstantSource {
    last: Mutex<DateTime<Utc>>,
}

impl InstantSource {
    fn new() -> Self {
        Self {
            last: Mutex::new(DateTime::<Utc>::MIN_UTC),
        }
    }

    fn next(&self) -> DateTime<Utc> {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        let mut now = Utc::now();
        if now <= *last {
            now = *last + Duration::microseconds(1);
        }
        *last = now;
        now
    }
}

/// Per-object version chain.
#[derive(Debug)]
struct VersionHistory<T> {
    next_version: u64,
    documents: Vec<Document<T>>,
}

/// In-memory bitemporal document master.
///
/// Documents are keyed by [`ObjectId`]; every stored state carries a
/// business-time interval (`version_from`/`version_to`) and a
/// correction-time interval (`correction_from`/`correction_to`). See the
/// [module docs](crate::master) for the mutation semantics.
///
/// The master is `Send + Sync`: reads take a shared lock, all mutation a
/// single exclusive lock.
///
/// # Example
///
/// ```
/// use infra_master::master::BeanMaster;
/// use infra_master::id::VersionCorrection;
/// # use infra_master::master::MasterRecord;
/// # use infra_master::id::ExternalIdBundle;
/// # #[derive(Clone)]
/// # struct Named { name: String, ids: ExternalIdBundle }
/// # impl MasterRecord for Named {
/// #     fn name(&self) -> &str { &self.name }
/// #     fn external_ids(&self) -> &ExternalIdBundle { &self.ids }
/// # }
///
/// let master: BeanMaster<Named> = BeanMaster::new("Mem");
/// let doc = master.add(Named { name: "one".into(), ids: ExternalIdBundle::empty() }).unwrap();
/// assert_eq!(doc.unique_id.version(), "0");
///
/// let again = master.get(&doc.unique_id).unwrap();
/// assert_eq!(again.value.name, "one");
/// ```
#[derive(Debug)]
pub struct BeanMaster<T> {
    scheme: String,
    state: RwLock<HashMap<ObjectId, VersionHistory<T>>>,
    next_object: AtomicU64,
    clock: InstantSource,
}

impl<T: Clone> BeanMaster<T> {
    /// Create an empty master issuing ids under `scheme`.
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            state: RwLock::new(HashMap::new()),
            next_object: AtomicU64::new(1),
            clock: InstantSource::new(),
        }
    }

    /// The id scheme of this master.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    fn new_object_id(&self) -> ObjectId {
        let n = self.next_object.fetch_add(1, Ordering::Relaxed);
        ObjectId::new(&self.scheme, n.to_string())
            .unwrap_or_else(|_| unreachable!("scheme validated at construction"))
    }

    /// Store a new object; returns its version "0" document.
    pub fn add(&self, value: T) -> Result<Document<T>, MasterError> {
        let object_id = self.new_object_id();
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let now = self.clock.next();
        let doc = Document {
            unique_id: object_id.at_version("0"),
            version_from: now,
            version_to: None,
            correction_from: now,
            correction_to: None,
            value,
        };
        state.insert(
            object_id,
            VersionHistory {
                next_version: 1,
                documents: vec![doc.clone()],
            },
        );
        debug!(id = %doc.unique_id, "added document");
        Ok(doc)
    }

    /// Replace the latest version of an object in business time.
    ///
    /// `unique_id` must identify the latest version; the superseded state
    /// receives `version_to = now` and the new document opens a fresh
    /// version at `now`.
    pub fn update(&self, unique_id: &UniqueId, value: T) -> Result<Document<T>, MasterError> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let object_id = unique_id.object_id();
        let history = state
            .get_mut(&object_id)
            .ok_or_else(|| MasterError::NotFound(object_id.to_string()))?;

        let latest_idx = history
            .documents
            .iter()
            .position(|d| d.is_latest())
            .ok_or_else(|| MasterError::NotFound(format!("{object_id} (removed)")))?;
        if history.documents[latest_idx].unique_id != *unique_id {
            return Err(MasterError::NotLatestVersion(unique_id.to_string()));
        }

        let now = self.clock.next();
        history.documents[latest_idx].version_to = Some(now);

        let version = history.next_version.to_string();
        history.next_version += 1;
        let doc = Document {
            unique_id: object_id.at_version(version),
            version_from: now,
            version_to: None,
            correction_from: now,
            correction_to: None,
            value,
        };
        history.documents.push(doc.clone());
        debug!(id = %doc.unique_id, "updated document");
        Ok(doc)
    }

    /// Correct one version without touching business time.
    ///
    /// `unique_id` must identify the active correction of an existing
    /// version. The corrected document keeps the base version's business
    /// interval; the base state's correction interval closes at `now`.
    pub fn correct(&self, unique_id: &UniqueId, value: T) -> Result<Document<T>, MasterError> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let object_id = unique_id.object_id();
        let history = state
            .get_mut(&object_id)
            .ok_or_else(|| MasterError::NotFound(object_id.to_string()))?;

        let base_idx = history
            .documents
            .iter()
            .position(|d| d.unique_id == *unique_id)
            .ok_or_else(|| MasterError::NotFound(unique_id.to_string()))?;
        if history.documents[base_idx].correction_to.is_some() {
            return Err(MasterError::VersionConflict(format!(
                "{unique_id} has already been corrected"
            )));
        }

        let now = self.clock.next();
        history.documents[base_idx].correction_to = Some(now);

        let version = history.next_version.to_string();
        history.next_version += 1;
        let doc = Document {
            unique_id: object_id.at_version(version),
            version_from: history.documents[base_idx].version_from,
            version_to: history.documents[base_idx].version_to,
            correction_from: now,
            correction_to: None,
            value,
        };
        history.documents.push(doc.clone());
        debug!(id = %doc.unique_id, "corrected document");
        Ok(doc)
    }

    /// Logically delete an object by closing its latest version.
    ///
    /// History stays queryable; only the "current" view loses the object.
    pub fn remove(&self, object_id: &ObjectId) -> Result<(), MasterError> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let history = state
            .get_mut(object_id)
            .ok_or_else(|| MasterError::NotFound(object_id.to_string()))?;
        let latest = history
            .documents
            .iter_mut()
            .find(|d| d.is_latest())
            .ok_or_else(|| MasterError::NotFound(format!("{object_id} (removed)")))?;
        let now = self.clock.next();
        latest.version_to = Some(now);
        debug!(id = %object_id, "removed document");
        Ok(())
    }

    /// Fetch the stored state identified by `unique_id`.
    ///
    /// If that state has since been corrected, the latest correction of
    /// the same business version is returned.
    pub fn get(&self, unique_id: &UniqueId) -> Result<Document<T>, MasterError> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let history = state
            .get(&unique_id.object_id())
            .ok_or_else(|| MasterError::NotFound(unique_id.to_string()))?;
        let base = history
            .documents
            .iter()
            .find(|d| d.unique_id == *unique_id)
            .ok_or_else(|| MasterError::NotFound(unique_id.to_string()))?;
        if base.correction_to.is_none() {
            return Ok(base.clone());
        }
        // Follow to the live correction of the same business version.
        history
            .documents
            .iter()
            .find(|d| d.version_from == base.version_from && d.correction_to.is_none())
            .cloned()
            .ok_or_else(|| MasterError::VersionConflict(unique_id.to_string()))
    }

    /// Fetch the state of an object at given bitemporal coordinates.
    pub fn get_at(
        &self,
        object_id: &ObjectId,
        vc: VersionCorrection,
    ) -> Result<Document<T>, MasterError> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let history = state
            .get(object_id)
            .ok_or_else(|| MasterError::NotFound(object_id.to_string()))?;
        history
            .documents
            .iter()
            .find(|d| on_version_axis(d, vc.version_as_of) && on_correction_axis(d, vc.corrected_to))
            .cloned()
            .ok_or_else(|| MasterError::NotFound(format!("{object_id} at {vc}")))
    }

    /// All versions of an object visible under the request, newest first.
    pub fn history(
        &self,
        object_id: &ObjectId,
        request: HistoryRequest,
    ) -> Result<Vec<Document<T>>, MasterError> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let history = state
            .get(object_id)
            .ok_or_else(|| MasterError::NotFound(object_id.to_string()))?;
        let mut docs: Vec<Document<T>> = history
            .documents
            .iter()
            .filter(|d| on_correction_axis(d, request.corrected_to))
            .filter(|d| {
                request
                    .versions_from
                    .map_or(true, |from| d.version_to.map_or(true, |to| to > from))
            })
            .filter(|d| {
                request
                    .versions_to
                    .map_or(true, |to| d.version_from < to)
            })
            .cloned()
            .collect();
        docs.sort_by(|a, b| b.version_from.cmp(&a.version_from));
        Ok(docs)
    }
}

impl<T: MasterRecord> BeanMaster<T> {
    /// Search documents by name pattern and/or external id.
    pub fn search(&self, request: &SearchRequest) -> Vec<Document<T>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let vc = request.version_correction;
        let mut docs: Vec<Document<T>> = state
            .values()
            .flat_map(|h| {
                h.documents.iter().find(|d| {
                    on_version_axis(d, vc.version_as_of) && on_correction_axis(d, vc.corrected_to)
                })
            })
            .filter(|d| {
                request
                    .name
                    .as_deref()
                    .map_or(true, |pattern| glob_match(pattern, d.value.name()))
            })
            .filter(|d| {
                request
                    .external_id
                    .as_ref()
                    .map_or(true, |id| d.value.external_ids().contains(id))
            })
            .cloned()
            .collect();
        docs.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));
        docs
    }
}

fn on_version_axis<T>(doc: &Document<T>, version_as_of: Option<DateTime<Utc>>) -> bool {
    match version_as_of {
        None => doc.version_to.is_none(),
        Some(instant) => doc.version_contains(instant),
    }
}

fn on_correction_axis<T>(doc: &Document<T>, corrected_to: Option<DateTime<Utc>>) -> bool {
    match corrected_to {
        None => doc.correction_to.is_none(),
        Some(instant) => doc.correction_contains(instant),
    }
}

/// Case-insensitive glob match with `*` wildcards.
fn glob_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.to_lowercase().chars().collect();
    let t: Vec<char> = text.to_lowercase().chars().collect();
    let (mut pi, mut ti) = (0usize, 0usize);
    let (mut star, mut mark) = (None::<usize>, 0usize);
    while ti < t.len() {
        if pi < p.len() && (p[pi] == t[ti]) {
            pi += 1;
            ti += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some(pi);
            mark = ti;
            pi += 1;
        } else if let Some(s) = star {
            pi = s + 1;
            mark += 1;
            ti = mark;
        } else {
            return false;
        }
    }
    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }
    pi == p.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{ExternalId, ExternalIdBundle};

    #[derive(Debug, Clone, PartialEq)]
    struct Payload {
        name: String,
        ids: ExternalIdBundle,
        data: i32,
    }

    impl Payload {
        fn new(name: &str, data: i32) -> Self {
            Self {
                name: name.to_string(),
                ids: ExternalIdBundle::single(ExternalId::new("TEST", name).unwrap()),
                data,
            }
        }
    }

    impl MasterRecord for Payload {
        fn name(&self) -> &str {
            &self.name
        }
        fn external_ids(&self) -> &ExternalIdBundle {
            &self.ids
        }
    }

    fn master() -> BeanMaster<Payload> {
        BeanMaster::new("Mem")
    }

    #[test]
    fn test_add_assigns_version_zero_open_intervals() {
        let m = master();
        let doc = m.add(Payload::new("first", 1)).unwrap();
        assert_eq!(doc.unique_id.version(), "0");
        assert!(doc.version_to.is_none());
        assert!(doc.correction_to.is_none());
        assert_eq!(doc.version_from, doc.correction_from);
    }

    #[test]
    fn test_update_closes_old_version_and_opens_new() {
        let m = master();
        let v0 = m.add(Payload::new("first", 1)).unwrap();
        let v1 = m.update(&v0.unique_id, Payload::new("first", 2)).unwrap();

        assert_eq!(v1.unique_id.version(), "1");
        assert!(v1.version_from > v0.version_from);
        assert!(v1.version_to.is_none());
        assert_eq!(v1.version_from, v1.correction_from);

        // The superseded version now ends where the new one begins
        let old = m.get(&v0.unique_id).unwrap();
        assert_eq!(old.version_to, Some(v1.version_from));
        assert!(old.correction_to.is_none());
        assert_eq!(old.value.data, 1);
    }

    #[test]
    fn test_update_requires_latest_version() {
        let m = master();
        let v0 = m.add(Payload::new("first", 1)).unwrap();
        let _v1 = m.update(&v0.unique_id, Payload::new("first", 2)).unwrap();
        let err = m.update(&v0.unique_id, Payload::new("first", 3)).unwrap_err();
        assert!(matches!(err, MasterError::NotLatestVersion(_)));
    }

    #[test]
    fn test_correct_keeps_business_time() {
        let m = master();
        let v0 = m.add(Payload::new("first", 1)).unwrap();
        let c = m.correct(&v0.unique_id, Payload::new("first", 10)).unwrap();

        assert_eq!(c.version_from, v0.version_from);
        assert!(c.version_to.is_none());
        assert!(c.correction_from > v0.correction_from);
        assert!(c.correction_to.is_none());

        // The base state's correction interval is closed
        let latest = m.get_at(&v0.unique_id.object_id(), VersionCorrection::LATEST).unwrap();
        assert_eq!(latest.value.data, 10);

        // get by the original uid follows to the live correction
        let via_base = m.get(&v0.unique_id).unwrap();
        assert_eq!(via_base.value.data, 10);
    }

    #[test]
    fn test_correct_already_corrected_fails() {
        let m = master();
        let v0 = m.add(Payload::new("first", 1)).unwrap();
        let _c = m.correct(&v0.unique_id, Payload::new("first", 10)).unwrap();
        let err = m.correct(&v0.unique_id, Payload::new("first", 11)).unwrap_err();
        assert!(matches!(err, MasterError::VersionConflict(_)));
    }

    #[test]
    fn test_remove_is_logical() {
        let m = master();
        let v0 = m.add(Payload::new("first", 1)).unwrap();
        let oid = v0.unique_id.object_id();
        m.remove(&oid).unwrap();

        // Latest view no longer sees the object
        assert!(matches!(
            m.get_at(&oid, VersionCorrection::LATEST),
            Err(MasterError::NotFound(_))
        ));

        // History still does
        let history = m.history(&oid, HistoryRequest::full()).unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].version_to.is_some());

        // Historic point-in-time lookup still resolves
        let vc = VersionCorrection::of_version_as_of(v0.version_from);
        assert_eq!(m.get_at(&oid, vc).unwrap().value.data, 1);

        // Double remove fails
        assert!(m.remove(&oid).is_err());
    }

    #[test]
    fn test_get_at_honours_both_axes() {
        let m = master();
        let v0 = m.add(Payload::new("first", 1)).unwrap();
        let v1 = m.update(&v0.unique_id, Payload::new("first", 2)).unwrap();
        let c = m.correct(&v0.unique_id, Payload::new("first", 10)).unwrap();
        let oid = v0.unique_id.object_id();

        // Before the correction, the old version reads its original value
        let vc = VersionCorrection::of(v0.version_from, v0.correction_from);
        assert_eq!(m.get_at(&oid, vc).unwrap().value.data, 1);

        // After the correction, the same business time reads the corrected value
        let vc = VersionCorrection::of(v0.version_from, c.correction_from);
        assert_eq!(m.get_at(&oid, vc).unwrap().value.data, 10);

        // Latest version is untouched by the correction of version 0
        let vc = VersionCorrection::of_version_as_of(v1.version_from);
        assert_eq!(m.get_at(&oid, vc).unwrap().value.data, 2);
    }

    #[test]
    fn test_history_newest_first_with_window() {
        let m = master();
        let v0 = m.add(Payload::new("first", 1)).unwrap();
        let v1 = m.update(&v0.unique_id, Payload::new("first", 2)).unwrap();
        let v2 = m.update(&v1.unique_id, Payload::new("first", 3)).unwrap();
        let oid = v0.unique_id.object_id();

        let all = m.history(&oid, HistoryRequest::full()).unwrap();
        let data: Vec<i32> = all.iter().map(|d| d.value.data).collect();
        assert_eq!(data, vec![3, 2, 1]);

        // Window excluding the first version
        let windowed = m
            .history(&oid, HistoryRequest::full().with_versions_from(v1.version_from))
            .unwrap();
        let data: Vec<i32> = windowed.iter().map(|d| d.value.data).collect();
        assert_eq!(data, vec![3, 2]);

        // Window excluding the last version
        let windowed = m
            .history(&oid, HistoryRequest::full().with_versions_to(v2.version_from))
            .unwrap();
        let data: Vec<i32> = windowed.iter().map(|d| d.value.data).collect();
        assert_eq!(data, vec![2, 1]);
    }

    #[test]
    fn test_history_under_correction_window() {
        let m = master();
        let v0 = m.add(Payload::new("first", 1)).unwrap();
        let c = m.correct(&v0.unique_id, Payload::new("first", 10)).unwrap();
        let oid = v0.unique_id.object_id();

        // Latest corrections see only the corrected state
        let latest = m.history(&oid, HistoryRequest::full()).unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].value.data, 10);

        // As of before the correction, the original state shows
        let before = m
            .history(&oid, HistoryRequest::full().with_corrected_to(v0.correction_from))
            .unwrap();
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].value.data, 1);
        let _ = c;
    }

    #[test]
    fn test_search_by_name_and_external_id() {
        let m = master();
        m.add(Payload::new("USD Deposit", 1)).unwrap();
        m.add(Payload::new("EUR Deposit", 2)).unwrap();
        m.add(Payload::new("USD Libor", 3)).unwrap();

        let usd = m.search(&SearchRequest::all().with_name("usd*"));
        assert_eq!(usd.len(), 2);

        let deposits = m.search(&SearchRequest::all().with_name("*Deposit"));
        assert_eq!(deposits.len(), 2);

        let by_id = m.search(
            &SearchRequest::all()
                .with_external_id(ExternalId::new("TEST", "EUR Deposit").unwrap()),
        );
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].value.data, 2);

        let none = m.search(&SearchRequest::all().with_name("GBP*"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_instants_are_strictly_monotonic() {
        let m = master();
        let mut last = None;
        for i in 0..50 {
            let doc = m.add(Payload::new(&format!("obj{i}"), i)).unwrap();
            if let Some(prev) = last {
                assert!(doc.version_from > prev);
            }
            last = Some(doc.version_from);
        }
    }

    #[test]
    fn test_master_is_shareable_across_threads() {
        use std::sync::Arc;

        let m = Arc::new(master());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let m = Arc::clone(&m);
                std::thread::spawn(move || {
                    for j in 0..10 {
                        m.add(Payload::new(&format!("t{i}-{j}"), j)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(m.search(&SearchRequest::all()).len(), 40);
    }

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*", "anything"));
        assert!(glob_match("usd*", "USD Deposit"));
        assert!(glob_match("*deposit", "USD Deposit"));
        assert!(glob_match("u*d*t", "USD Deposit"));
        assert!(!glob_match("eur*", "USD Deposit"));
        assert!(glob_match("exact", "Exact"));
        assert!(!glob_match("exact", "Exactly"));
    }
}
