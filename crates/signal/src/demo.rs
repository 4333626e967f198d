use crate::SignalWriter;
use rand::Rng;
use std::time::Duration;
use tokio::time;
use tracing::debug;

/// Spawn the demo signal source: a background Tokio task that writes a
/// uniform random reading in `[min, max]` into the cell every `interval_ms`
/// milliseconds.
///
/// Pure demo scaffolding — a real deployment replaces this task with
/// whatever produces the signal.  The task stops automatically once the
/// last reader of the cell is dropped.
pub fn spawn_generator(
    writer: SignalWriter,
    interval_ms: u64,
    min: f64,
    max: f64,
) -> tokio::task::JoinHandle<()> {
    let interval = Duration::from_millis(interval_ms);

    tokio::spawn(async move {
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;
            let value = rand::thread_rng().gen_range(min..=max);

            if !writer.set(value) {
                break; // all readers dropped
            }
        }

        debug!("demo signal source stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latest_value;

    #[tokio::test]
    async fn generated_readings_stay_in_range() {
        let (writer, reader) = latest_value(None);
        let task = spawn_generator(writer, 1, 40.0, 80.0);

        // The first interval tick fires immediately; give it a few rounds.
        time::sleep(Duration::from_millis(20)).await;

        let value = reader.latest().expect("generator should have written");
        assert!((40.0..=80.0).contains(&value), "out of range: {value}");

        task.abort();
    }

    #[tokio::test]
    async fn generator_stops_once_the_reader_is_gone() {
        let (writer, reader) = latest_value(None);
        let task = spawn_generator(writer, 1, 40.0, 80.0);

        drop(reader);

        for _ in 0..100 {
            if task.is_finished() {
                return;
            }
            time::sleep(Duration::from_millis(2)).await;
        }
        panic!("generator kept running with no readers");
    }
}
