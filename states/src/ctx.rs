use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use flume::{Receiver, Sender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::updater::Update;
use crate::{
    Command, CommandSnapshot, Compute, Error, LatestOnlyUpdater, State, TaskHandle, TaskId,
};

struct PendingCommand {
    type_id: TypeId,
    name: &'static str,
    command: Box<dyn Command>,
}

/// The store: registered states and computes, the command queue and the
/// tasks spawned from it.
///
/// All methods run on the UI thread. Commands run on the ambient Tokio
/// runtime and talk back only through the update channel.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,

    pending: Vec<PendingCommand>,
    generations: BTreeMap<TypeId, u64>,
    running: BTreeMap<TypeId, TaskHandle>,
    tasks: JoinSet<()>,

    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("pending", &self.pending.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            pending: Vec::new(),
            generations: BTreeMap::new(),
            running: BTreeMap::new(),
            tasks: JoinSet::new(),
            send,
            recv,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|_| panic!("State {} is not registered", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|_| panic!("State {} is not registered", type_name::<T>()))
    }

    /// Mutates a registered state in place. Unregistered states are skipped.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        match self.try_state_mut::<T>() {
            Ok(state) => f(state),
            Err(err) => log::warn!("update skipped: {err}"),
        }
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never recorded.
    pub fn compute<T: Compute>(&self) -> &T {
        self.cached::<T>()
            .unwrap_or_else(|| panic!("Compute {} is not recorded", type_name::<T>()))
    }

    /// Queues a command; it is spawned on the next [`Self::flush_commands`].
    pub fn enqueue_command<C: Command + Default>(&mut self) {
        self.enqueue(C::default());
    }

    pub fn enqueue<C: Command>(&mut self, command: C) {
        self.pending.push(PendingCommand {
            type_id: TypeId::of::<C>(),
            name: type_name::<C>(),
            command: Box::new(command),
        });
    }

    pub fn has_pending_commands(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Latest generation dispatched for `C`, `0` when `C` never ran.
    pub fn generation_of<C: Command>(&self) -> u64 {
        self.generations
            .get(&TypeId::of::<C>())
            .copied()
            .unwrap_or_default()
    }

    /// Spawns every queued command on the ambient Tokio runtime.
    ///
    /// Each command gets a fresh generation. A previous, still running task
    /// of the same command type is cancelled first.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime and commands are queued.
    pub fn flush_commands(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let pending = std::mem::take(&mut self.pending);
        for PendingCommand {
            type_id,
            name,
            command,
        } in pending
        {
            let generation = self.generations.entry(type_id).or_default();
            *generation += 1;
            let task = TaskId::new(type_id, *generation);

            if let Some(previous) = self.running.remove(&type_id) {
                log::debug!(
                    "cancelling {name} generation {} for generation {}",
                    previous.id().generation(),
                    task.generation()
                );
                previous.cancel();
            }

            let token = CancellationToken::new();
            self.running
                .insert(type_id, TaskHandle::new(task, token.clone()));

            let snapshot = self.snapshot();
            let updater = LatestOnlyUpdater::new(task, self.send.clone());
            let future = command.run(snapshot, updater);

            log::debug!("spawning {name} generation {}", task.generation());
            self.tasks.spawn(async move {
                tokio::select! {
                    () = token.cancelled() => {}
                    () = future => {}
                }
            });
        }
    }

    /// Applies every update received since the last call and reaps finished
    /// tasks. Updates from superseded command runs are dropped.
    ///
    /// Returns the number of updates applied.
    pub fn sync_computes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.recv.try_recv() {
            let task = update.task;
            let latest = self
                .generations
                .get(&task.type_id())
                .copied()
                .unwrap_or_default();
            if task.is_older_than(latest) {
                log::debug!(
                    "dropping stale update from generation {} (latest {latest})",
                    task.generation()
                );
                continue;
            }

            match self.computes.get_mut(&update.target) {
                Some(compute) => {
                    compute.assign_box(update.value);
                    applied += 1;
                }
                None => log::warn!("update for unrecorded compute {:?}", update.target),
            }
        }

        while let Some(result) = self.tasks.try_join_next() {
            if let Err(err) = result {
                log::warn!("command task failed: {err}");
            }
        }

        applied
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn task_set_mut(&mut self) -> &mut JoinSet<()> {
        &mut self.tasks
    }

    /// Waits for every spawned task, syncing after each one finishes.
    pub async fn flush_and_wait(&mut self) {
        self.sync_computes();
        self.flush_commands();
        while self.tasks.join_next().await.is_some() {
            self.sync_computes();
        }
        self.sync_computes();
    }

    /// Cancels all running tasks and waits for them to stop.
    pub async fn shutdown(&mut self) {
        for handle in self.running.values() {
            handle.cancel();
        }
        self.running.clear();
        self.tasks.shutdown().await;
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snapshot = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.clone_boxed() {
                snapshot.insert_state(*id, value);
            }
        }
        for (id, compute) in &self.computes {
            if let Some(value) = compute.clone_boxed() {
                snapshot.insert_compute(*id, value);
            }
        }
        snapshot
    }
}
