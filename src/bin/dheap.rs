//! Interactive d-ary heap driver
//!
//! Loads candidate datasets from a text file (one dataset per line), lets
//! the user pick one and a branching factor, builds the heap, then runs a
//! menu loop over the heap operations. Contract violations reported by the
//! heap (overflow, bad index, non-increasing key, ...) are printed and the
//! menu continues; the program never aborts on them.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use dary_maxheap::loader::read_datasets;
use dary_maxheap::DaryHeap;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File containing the candidate datasets, one per line
    #[arg()]
    file: PathBuf,
}

/// Prompts until the user enters an integer within `[min, max]`.
///
/// Returns `None` when stdin is closed.
fn prompt_int(prompt: &str, min: i64, max: i64) -> io::Result<Option<i64>> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Ok(n) = line.trim().parse::<i64>() {
            if n >= min && n <= max {
                return Ok(Some(n));
            }
        }
        println!("Invalid input. Please enter a number between {} and {}.", min, max);
    }
}

fn print_heap(heap: &DaryHeap) {
    let rendered: Vec<String> = heap.as_slice().iter().map(|k| k.to_string()).collect();
    println!("{}", rendered.join(" "));
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let datasets = read_datasets(&args.file)?;
    if datasets.is_empty() {
        println!("No datasets found in {:?}.", args.file);
        return Ok(());
    }

    println!("Available arrays:");
    for (i, dataset) in datasets.iter().enumerate() {
        let rendered: Vec<String> = dataset.iter().map(|k| k.to_string()).collect();
        println!("array {}: {}", i + 1, rendered.join(" "));
    }

    let Some(selected) = prompt_int(
        "\nSelect an array number: ",
        1,
        datasets.len() as i64,
    )?
    else {
        return Ok(());
    };
    let values = datasets[selected as usize - 1].clone();

    let Some(degree) = prompt_int("Enter the degree (d) of the heap: ", 1, i64::MAX)? else {
        return Ok(());
    };

    let mut heap = DaryHeap::from_vec(values, degree as usize)?;
    heap.build();

    loop {
        println!("\nYour array with d={} is now heaped like this:", heap.degree());
        print_heap(&heap);

        println!("\nChoose an operation:");
        println!("1. Insert Key");
        println!("2. Increase Key");
        println!("3. Extract Max");
        println!("4. Delete Key");
        println!("5. Exit");
        let Some(choice) = prompt_int("Enter your choice: ", 1, 5)? else {
            return Ok(());
        };

        match choice {
            1 => {
                let Some(key) = prompt_int("Enter the key to insert: ", i64::MIN, i64::MAX)?
                else {
                    return Ok(());
                };
                if let Err(e) = heap.insert(key) {
                    println!("{}", e);
                }
            }
            2 => {
                if heap.is_empty() {
                    println!("Heap is empty!");
                    continue;
                }
                let Some(index) =
                    prompt_int("Enter the index: ", 0, heap.len() as i64 - 1)?
                else {
                    return Ok(());
                };
                let Some(key) = prompt_int("Enter the new key: ", i64::MIN, i64::MAX)? else {
                    return Ok(());
                };
                if let Err(e) = heap.increase_key(index as usize, key) {
                    println!("{}", e);
                }
            }
            3 => match heap.extract_max() {
                Ok(max) => println!("Extracted Max: {}", max),
                Err(_) => println!("Heap is empty!"),
            },
            4 => {
                if heap.is_empty() {
                    println!("Heap is empty!");
                    continue;
                }
                let Some(index) = prompt_int(
                    "Enter the index of the key to delete: ",
                    0,
                    heap.len() as i64 - 1,
                )?
                else {
                    return Ok(());
                };
                match heap.delete(index as usize) {
                    Ok(removed) => println!("Deleted: {}", removed),
                    Err(e) => println!("{}", e),
                }
            }
            _ => {
                println!("Exiting program.");
                return Ok(());
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    run(Args::parse())
}
