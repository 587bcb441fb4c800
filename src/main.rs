use std::env;
use std::process::ExitCode;

use linear_collections::brackets;
use linear_collections::collections::adapters::{Queue, Stack};
use linear_collections::collections::circ::RingQueue;
use linear_collections::collections::contiguous::Vector;
use linear_collections::collections::linked::{LinkedList, SinglyLinkedList};
use linear_collections::error::CollectionError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = collections_demo() {
        warn!(%err, "collection demo failed");
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let expressions = if args.is_empty() {
        vec!["{[()]}".to_owned()]
    } else {
        args
    };

    println!("\n[Brackets]\n");
    let mut all_balanced = true;
    for expression in &expressions {
        match brackets::check(expression) {
            Ok(()) => println!("{expression:?} is balanced"),
            Err(err) => {
                all_balanced = false;
                println!("{expression:?} is not balanced: {err}");
            }
        }
    }

    if all_balanced {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn collections_demo() -> Result<(), CollectionError> {
    println!("\n[LinkedList]\n");
    let mut list = LinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_front(0);
    list.try_insert(1, 5)?;
    println!("{list}");
    println!("removed {}", list.try_remove(2)?);
    println!("{list}, len {}", list.len());

    println!("\n[SinglyLinkedList]\n");
    let mut singly: SinglyLinkedList<_> = ["b", "c"].into_iter().collect();
    singly.push_front("a");
    println!("{singly}, index of \"c\": {:?}", singly.index_of(&"c"));

    println!("\n[RingQueue]\n");
    let mut ring = RingQueue::try_with_cap(5)?;
    for i in 1..=3 {
        ring.try_enqueue(i)?;
    }
    println!("dequeued {}", ring.try_dequeue()?);
    println!("{ring}, len {} of {}", ring.len(), ring.cap());

    println!("\n[Vector]\n");
    let mut vec: Vector<_> = (10..=30).step_by(10).collect();
    vec.try_replace(1, 99)?;
    println!("{vec}");
    vec.try_remove(1)?;
    println!("{vec}, cap {}", vec.cap());

    println!("\n[Stack]\n");
    let mut stack: Stack<_> = "abc".chars().collect();
    println!("{stack}, top {}", stack.try_peek()?);
    println!("popped {}", stack.try_pop()?);

    println!("\n[Queue]\n");
    let mut queue: Queue<_> = (1..=3).collect();
    println!("{queue}, front {}", queue.try_peek()?);
    println!("dequeued {}", queue.try_dequeue()?);

    info!("collection demo complete");
    Ok(())
}
