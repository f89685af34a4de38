use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use ubersweeps_backend::{
    config::Config,
    handlers,
    middlewares::create_cors,
    services::{OrganizerService, SweepstakeService},
    store::SweepstakeStore,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 构造内存样本数据仓库（进程内唯一实例，显式注入各服务）
    let store = SweepstakeStore::new(&config.seed);
    log::info!(
        "Seeded in-memory store with {} sweepstakes ({} synthetic, rng_seed: {:?})",
        store.all().len(),
        config.seed.synthetic_count,
        config.seed.rng_seed
    );

    // 创建服务
    let sweepstake_service = SweepstakeService::new(store.clone());
    let organizer_service = OrganizerService::new(store);

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(sweepstake_service.clone()))
            .app_data(web::Data::new(organizer_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::sweepstake_config)
                    .configure(handlers::category_config)
                    .configure(handlers::organizer_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
