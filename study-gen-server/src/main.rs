use std::sync::Mutex;

use actix_web::middleware::Logger;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use serde::{Deserialize, Serialize};

use study_gen_core::study::cache::PreviewCache;
use study_gen_core::study::config::{DEFAULT_COUNT, DEFAULT_SEED};
use study_gen_core::study::export::StudySet;
use study_gen_core::study::grading::check_written;
use study_gen_core::study::SAMPLE_NOTES;
use study_gen_core::{GenerationConfig, Preview};

/// Server settings, from the command line or the environment.
#[derive(Parser, Debug)]
#[command(name = "study-gen-server", about = "HTTP front-end for the study material generator")]
struct ServerConfig {
	/// Address to bind
	#[arg(long, env = "STUDY_GEN_HOST", default_value = "127.0.0.1")]
	host: String,

	/// Port to listen on
	#[arg(long, env = "STUDY_GEN_PORT", default_value_t = 5000)]
	port: u16,

	/// Number of previews kept in memory
	#[arg(long, env = "STUDY_GEN_CACHE", default_value_t = 32)]
	cache_size: usize,
}

/// Body of the `/v1/preview` and `/v1/export` endpoints
#[derive(Deserialize)]
struct GenerateParams {
	notes: String,
	count: Option<usize>,
	seed: Option<i64>,
}

impl GenerateParams {
	/// Validated generation settings, defaults filled in.
	fn config(&self) -> Result<GenerationConfig, String> {
		let config = GenerationConfig::new(
			self.count.unwrap_or(DEFAULT_COUNT),
			self.seed.unwrap_or(DEFAULT_SEED),
		)?;
		Ok(config)
	}
}

#[derive(Deserialize)]
struct GradeParams {
	answer: String,
	response: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct GradeResult {
	correct: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ImportSummary {
	flashcards: usize,
	mcq: usize,
	written: usize,
}

#[derive(Serialize, Deserialize, Debug)]
struct Sample {
	notes: String,
	seed: i64,
}

struct SharedData {
	cache: PreviewCache,
}

/// Runs (or fetches from the cache) the generation pipeline.
fn cached_preview(data: &web::Data<Mutex<SharedData>>, notes: &str, config: &GenerationConfig) -> Result<Preview, String> {
	let mut shared_data = data.lock().map_err(|_| "Cache lock failed".to_owned())?;
	Ok(shared_data.cache.get_or_generate(notes, config))
}

/// HTTP POST endpoint `/v1/preview`
///
/// Returns the flashcards, questions and written prompts for the notes.
#[post("/v1/preview")]
async fn post_preview(data: web::Data<Mutex<SharedData>>, params: web::Json<GenerateParams>) -> impl Responder {
	let config = match params.config() {
		Ok(c) => c,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	match cached_preview(&data, &params.notes, &config) {
		Ok(preview) => HttpResponse::Ok().json(preview),
		Err(e) => HttpResponse::InternalServerError().body(e),
	}
}

/// HTTP POST endpoint `/v1/export`
///
/// Same as `/v1/preview`, wrapped into a timestamped archive.
#[post("/v1/export")]
async fn post_export(data: web::Data<Mutex<SharedData>>, params: web::Json<GenerateParams>) -> impl Responder {
	let config = match params.config() {
		Ok(c) => c,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	match cached_preview(&data, &params.notes, &config) {
		Ok(preview) => HttpResponse::Ok().json(StudySet::new(&params.notes, preview)),
		Err(e) => HttpResponse::InternalServerError().body(e),
	}
}

/// HTTP POST endpoint `/v1/import`
///
/// Validates an archive and reports what it holds.
#[post("/v1/import")]
async fn post_import(set: web::Json<StudySet>) -> impl Responder {
	if let Err(e) = set.validate() {
		log::warn!("Rejected import: {e}");
		return HttpResponse::BadRequest().body(String::from(e));
	}
	HttpResponse::Ok().json(ImportSummary {
		flashcards: set.flashcards.len(),
		mcq: set.mcq.len(),
		written: set.written.len(),
	})
}

/// HTTP POST endpoint `/v1/grade`
#[post("/v1/grade")]
async fn post_grade(params: web::Json<GradeParams>) -> impl Responder {
	HttpResponse::Ok().json(GradeResult { correct: check_written(&params.response, &params.answer) })
}

/// HTTP GET endpoint `/v1/sample`
///
/// Sample notes and a fresh random seed.
#[get("/v1/sample")]
async fn get_sample() -> impl Responder {
	match GenerationConfig::with_random_seed(DEFAULT_COUNT) {
		Ok(config) => HttpResponse::Ok().json(Sample { notes: SAMPLE_NOTES.to_owned(), seed: config.seed() }),
		Err(e) => HttpResponse::InternalServerError().body(String::from(e)),
	}
}

/// Main entry point for the server.
///
/// Builds the preview cache, wraps it in a `Mutex` for thread safety,
/// and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let server_config = ServerConfig::parse();

	let shared_data = SharedData {
		cache: PreviewCache::new(server_config.cache_size),
	};
	let shared_cache = web::Data::new(Mutex::new(shared_data));

	log::info!(
		"Listening on {}:{} (cache of {} previews)",
		server_config.host,
		server_config.port,
		server_config.cache_size
	);

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.app_data(shared_cache.clone())
			.service(post_preview)
			.service(post_export)
			.service(post_import)
			.service(post_grade)
			.service(get_sample)
	})
		.bind((server_config.host.as_str(), server_config.port))?
		.run()
		.await
}
