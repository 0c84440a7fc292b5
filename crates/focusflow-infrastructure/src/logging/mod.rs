//! 日志系统模块
//!
//! 提供统一的日志记录功能，支持：
//! - 结构化 JSON 日志（始终开启）- One-line JSON 格式，写入日志文件
//! - 人类可读彩色日志（仅 debug 构建）- 输出到 stderr
//! - 日志文件按天轮转（文件名前缀 `focusflow.log`）
//!
//! stdout 只留给命令的 JSON 输出，日志永远不写 stdout。
//!
//! 每条 JSON 日志包含：
//! - timestamp: ISO 8601 带时区，毫秒精度（例如 2024-09-14T10:32:15.123+08:00）
//! - level: TRACE/DEBUG/INFO/WARN/ERROR
//! - target: 模块路径（例如 focusflow_lib::application::services::streak_service）
//! - pid: 进程 ID（多个 CLI 进程共用同一日志文件时用于区分）
//! - tid: 线程 ID
//! - file + line: 源代码位置
//! - message: 主要文本，业务日志使用 `[subsystem] key=value` 形式
//! - fields: 结构化字段（key/value），没有则省略
//! - version: 应用版本
//!
//! 库代码通过 `log` 门面记录日志，`tracing-log` 把这些记录转发到这里安装的
//! tracing subscriber。

use log::LevelFilter;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{Event, Subscriber};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

pub const LOG_FILE_PREFIX: &str = "focusflow.log";

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// 初始化日志系统
///
/// 在 debug 模式下：
/// - 输出到 stderr（彩色，人类可读）
/// - 输出到文件（JSON 格式，one-line）
///
/// 在 release 模式下：
/// - 仅输出到文件（JSON 格式，one-line）
///
/// 重复调用直接返回 `Ok(())`。
pub fn init_logger(log_dir: PathBuf) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    // 确保日志目录存在
    std::fs::create_dir_all(&log_dir)?;

    // 保存到全局静态变量供后续使用
    let _ = LOG_DIR.set(log_dir.clone());

    // 将 log crate 的日志转发到 tracing
    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    // 创建文件 appender（按天轮转）
    let file_appender = rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    // guard 必须存活到进程结束，否则缓冲中的日志会丢失
    let _ = FILE_GUARD.set(guard);

    // 文件层：JSON 格式

    let json_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(JsonFormatter::new())
        .with_filter(default_filter(file_filter_directives()));

    // 控制台层：仅 debug 构建，写 stderr
    let stderr_layer = if cfg!(debug_assertions) {
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_ansi(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                ))
                .with_filter(default_filter("debug,sqlx=warn")),
        )
    } else {
        None
    };

    let subscriber = Registry::default().with(json_layer).with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "focusflow::logging",
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "Debug" } else { "Release" },
        "Logger initialized"
    );

    Ok(())
}

/// 文件层过滤：debug 构建下本项目记录 debug，sqlx 只记录 warn 以上
fn file_filter_directives() -> &'static str {
    if cfg!(debug_assertions) {
        "info,focusflow=debug,sqlx=warn"
    } else {
        "info,sqlx=warn"
    }
}

/// 优先使用 `RUST_LOG`，否则使用给定的过滤指令
fn default_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 获取日志目录（`init_logger` 之前返回 `None`）
pub fn get_log_dir() -> Option<PathBuf> {
    LOG_DIR.get().cloned()
}

/// JSON 格式化器：每条事件输出一行 JSON 对象
struct JsonFormatter {
    pid: u32,
    version: &'static str,
}

impl JsonFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S%.3f%:z")
            .to_string();

        let mut json = serde_json::json!({
            "timestamp": timestamp,
            "level": metadata.level().to_string(),
            "pid": self.pid,
            "tid": format!("{:?}", std::thread::current().id()),
            "target": metadata.target(),
            "version": self.version,
        });

        if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
            json["file"] = serde_json::json!(file);
            json["line"] = serde_json::json!(line);
        }

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        // message 单独提出，其余字段放入 fields
        if let Some(message) = visitor.fields.remove("message") {
            json["message"] = message;
        }
        if !visitor.fields.is_empty() {
            json["fields"] = serde_json::Value::Object(visitor.fields);
        }

        writeln!(
            writer,
            "{}",
            serde_json::to_string(&json).unwrap_or_default()
        )
    }
}

/// 收集事件字段
#[derive(Default)]
struct JsonVisitor {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl tracing::field::Visit for JsonVisitor {
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::json!(format!("{:?}", value)),
        );
    }
}
