// End-to-end integration tests for EchoFlow Backend API
//
// These tests use a shared testcontainers PostgreSQL instance with a database
// pool for test isolation. Each test receives its own isolated database from
// the pool, allowing tests to run in parallel without conflicts.
//
// The AI generator and the speech engine are replaced with in-process test
// doubles: the generator returns a canned reply (or fails on demand) and the
// speech engine records what it was asked to speak instead of producing audio.

mod helpers;
mod test_analysis;
mod test_progress;
