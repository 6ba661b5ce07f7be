use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

use clap::Parser;
use log::{info, warn};
use serde::Deserialize;
use regency_core::{Dictionary, Generator, RandomSource};

/// Struct representing query parameters for the `/v1/generate` and `/v1/rules` endpoints
#[derive(Deserialize)]
struct PatternParams {
	pattern: Option<String>,
	seed: Option<u64>
}

impl PatternParams {
	/// Returns the pattern, rejecting a missing parameter.
	///
	/// An empty pattern is valid and generates an empty string.
	fn pattern(&self) -> Result<&str, String> {
		self.pattern.as_deref().ok_or_else(|| "Missing pattern".to_owned())
	}

	/// Every request owns its random source; nothing is shared between requests.
	fn random_source(&self) -> RandomSource {
		match self.seed {
			Some(seed) => RandomSource::from_seed(seed),
			None => RandomSource::from_time(),
		}
	}
}

#[derive(Parser, Debug)]
#[command(name = "regency-server", version, about = "HTTP front-end for regency")]
struct Args {
	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to bind
	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Word list used by `\y` (one word per line)
	#[arg(short, long, value_name = "FILE")]
	dictionary: Option<String>,
}

struct SharedData {
	generator: Generator
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one string from the `pattern` query parameter.
/// Returns the generated string as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<PatternParams>) -> impl Responder {
	let pattern = match query.pattern() {
		Ok(p) => p,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let mut rng = query.random_source();
	match data.generator.generate(pattern, &mut rng) {
		Ok(result) => HttpResponse::Ok().body(result),
		Err(e) => {
			warn!("generation failed for {pattern:?}: {e}");
			HttpResponse::BadRequest().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/rules`
///
/// Returns the compiled rules of `pattern` as a JSON array of `{kind, spec}`.
#[get("/v1/rules")]
async fn get_rules(data: web::Data<SharedData>, query: web::Query<PatternParams>) -> impl Responder {
	let pattern = match query.pattern() {
		Ok(p) => p,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	match data.generator.compile(pattern) {
		Ok(rules) => HttpResponse::Ok().json(rules.rules()),
		Err(e) => HttpResponse::BadRequest().body(e.to_string())
	}
}

#[get("/v1/dictionary")]
async fn get_dictionary(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().body(data.generator.dictionary().words().join("\n"))
}

/// Main entry point for the server.
///
/// Loads the dictionary, builds an immutable `Generator` shared by all
/// workers, and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000 unless told otherwise.
/// - No lock is needed: each request brings its own random source.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let dictionary = match &args.dictionary {
		Some(path) => Dictionary::load(path).map_err(std::io::Error::other)?,
		None => Dictionary::builtin(),
	};
	let shared_data = web::Data::new(SharedData {
		generator: Generator::new(dictionary),
	});

	info!("listening on {}:{}", args.host, args.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.service(get_generated)
			.service(get_rules)
			.service(get_dictionary)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}
