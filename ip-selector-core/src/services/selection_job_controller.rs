//! 优选任务控制器
//!
//! 提交任务并轮询状态直到终态。同一时刻最多一个提交、一个轮询循环。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::error::{CoreError, CoreResult};
use crate::services::{PanelContext, SelectionResultStore};
use crate::types::{AddressRangeList, JobHandle, JobOutcome, JobPhase, UiTransition};

/// `phase` 为 `Submitting` 或 `Polling(_)` 时拒绝新的提交；
/// `Polling(h)` 从提交成功起就占住轮询槽位，直到循环结束
#[derive(Default)]
struct ControllerState {
    last_job: u64,
    active: Option<JobHandle>,
    polling: bool,
    phase: JobPhase,
}

/// 进行中标记，离开作用域时自动清除（包括 future 被取消）
struct InFlight<'a> {
    state: &'a Mutex<ControllerState>,
    kind: InFlightKind,
}

#[derive(Clone, Copy)]
enum InFlightKind {
    Submit,
    Poll,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match self.kind {
            InFlightKind::Submit => {
                if state.phase == JobPhase::Submitting {
                    state.phase = JobPhase::Idle;
                }
            }
            InFlightKind::Poll => {
                state.polling = false;
                // 循环被取消时释放槽位
                if matches!(state.phase, JobPhase::Polling(_)) {
                    state.phase = JobPhase::Idle;
                    state.active = None;
                }
            }
        }
    }
}

/// 优选任务控制器
pub struct SelectionJobController {
    ctx: Arc<PanelContext>,
    results: Arc<SelectionResultStore>,
    state: Mutex<ControllerState>,
}

impl SelectionJobController {
    #[must_use]
    pub fn new(ctx: Arc<PanelContext>, results: Arc<SelectionResultStore>) -> Self {
        Self {
            ctx,
            results,
            state: Mutex::new(ControllerState::default()),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 当前任务阶段
    pub fn phase(&self) -> JobPhase {
        self.lock_state().phase.clone()
    }

    /// 提交优选任务
    ///
    /// 成功后显示加载状态并返回新的任务句柄，但不启动轮询。句柄在轮询结束前
    /// 一直占用任务槽位，期间的提交直接返回 [`CoreError::JobInProgress`]，不发请求。
    pub async fn submit(&self, ranges: &AddressRangeList) -> CoreResult<JobHandle> {
        let _in_flight = {
            let mut state = self.lock_state();
            if state.phase.is_busy() || state.polling {
                log::warn!("Selection job already in progress, submit ignored");
                return Err(CoreError::JobInProgress);
            }
            state.phase = JobPhase::Submitting;
            InFlight {
                state: &self.state,
                kind: InFlightKind::Submit,
            }
        };

        log::info!("Submitting selection job with {} ranges", ranges.len());
        match self.ctx.backend.submit_selection(ranges.as_slice()).await {
            Ok(()) => {
                let handle = {
                    let mut state = self.lock_state();
                    state.last_job += 1;
                    let handle = JobHandle(state.last_job);
                    state.active = Some(handle);
                    state.phase = JobPhase::Polling(handle);
                    handle
                };
                log::info!("Selection job accepted as {handle}");
                self.ctx.emit(UiTransition::Loading);
                Ok(handle)
            }
            Err(e) => {
                let err = CoreError::Submission(e);
                self.lock_state().phase = JobPhase::Terminal(JobOutcome::Failed(err.user_message()));
                self.ctx.report_failure("Selection submit", &err);
                Err(err)
            }
        }
    }

    /// 轮询任务状态直到终态
    ///
    /// 已有轮询循环时返回 [`JobOutcome::AlreadyPolling`]，句柄不是当前任务时返回
    /// [`JobOutcome::Superseded`]，两者都不发请求。`Err` 仅在终态后刷新候选列表失败时返回。
    pub async fn poll_until_terminal(&self, handle: JobHandle) -> CoreResult<JobOutcome> {
        let _in_flight = {
            let mut state = self.lock_state();
            if state.polling {
                log::debug!("Poll loop already running, {handle} ignored");
                return Ok(JobOutcome::AlreadyPolling);
            }
            if state.active != Some(handle) {
                log::debug!("{handle} is not the active job");
                return Ok(JobOutcome::Superseded);
            }
            state.polling = true;
            state.phase = JobPhase::Polling(handle);
            InFlight {
                state: &self.state,
                kind: InFlightKind::Poll,
            }
        };

        let result = self.drive(handle).await;
        let terminal = match &result {
            Ok(outcome) => outcome.clone(),
            Err(e) => JobOutcome::Failed(e.user_message()),
        };
        let mut state = self.lock_state();
        state.phase = JobPhase::Terminal(terminal);
        state.active = None;
        drop(state);
        result
    }

    async fn drive(&self, handle: JobHandle) -> CoreResult<JobOutcome> {
        let settings = &self.ctx.settings;
        let interval = settings.poll_interval();
        let max_attempts = settings.poll_attempt_limit();
        let started = Instant::now();
        let deadline = started + settings.poll_timeout();
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            match self.ctx.backend.selection_status().await {
                Err(e) => {
                    let err = CoreError::Poll(e);
                    self.ctx.report_failure("Selection status", &err);
                    return Ok(JobOutcome::Failed(err.user_message()));
                }
                Ok(status) if status.is_terminal() => {
                    log::info!("{handle} finished with status {status} after {attempts} checks");
                    self.results.refresh().await?;
                    return Ok(JobOutcome::Completed(status));
                }
                Ok(status) => log::debug!("{handle} is {status} (check {attempts}/{max_attempts})"),
            }

            if attempts >= max_attempts || Instant::now() + interval > deadline {
                let waited = started.elapsed();
                let err = CoreError::TimedOut { attempts, waited };
                self.ctx.report_failure("Selection status", &err);
                return Ok(JobOutcome::TimedOut { attempts, waited });
            }

            tokio::time::sleep(interval).await;
        }
    }

    /// 在 tokio 运行时上启动轮询循环（fire-and-forget）
    pub fn spawn_poll(self: &Arc<Self>, handle: JobHandle) -> JoinHandle<CoreResult<JobOutcome>> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.poll_until_terminal(handle).await })
    }

    /// 提交任务并在后台启动轮询
    pub async fn submit_and_poll(
        self: &Arc<Self>,
        ranges: &AddressRangeList,
    ) -> CoreResult<(JobHandle, JoinHandle<CoreResult<JobOutcome>>)> {
        let handle = self.submit(ranges).await?;
        let poll = self.spawn_poll(handle);
        Ok((handle, poll))
    }
}
