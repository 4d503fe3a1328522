mod postgres_database;


pub use postgres_database::create_postgres_database;
