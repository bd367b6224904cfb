use FifoQueueMini::core::buildcore::{QueueEvent, QueueListener, QueueSystem};
use FifoQueueMini::core::dispatch::MulticastDelegate;
use FifoQueueMini::core::log::write_ndjson;
use FifoQueueMini::core::pet::{Pet, PetViewModel, Rarity};
use FifoQueueMini::core::prototype::{Creature, EyeballMonster, Monster};
use FifoQueueMini::core::ticket::{Priority, Ticket};
use chrono::{Duration, Local};
use std::error::Error;
use std::io;
use std::sync::Arc;

/// Prints every queue event as it happens
struct ConsoleListener;

impl QueueListener<Ticket> for ConsoleListener {
    fn on_event(&self, event: &QueueEvent<Ticket>) {
        println!("  [{}] #{} {:?} -> len {}", event.queue, event.global_id, event.op, event.len_after);
    }
}

trait EmergencyResponder {
    fn notify_fire(&self, location: &str);
    fn notify_car_crash(&self, location: &str);
}

struct FireStation;
struct PoliceStation;

impl EmergencyResponder for FireStation {
    fn notify_fire(&self, location: &str) {
        println!("Fire fighters were notified about fire at {}", location);
    }

    fn notify_car_crash(&self, location: &str) {
        println!("Fire fighters were notified about a car crash at {}", location);
    }
}

impl EmergencyResponder for PoliceStation {
    fn notify_fire(&self, location: &str) {
        println!("Police will respond to fire at {}", location);
    }

    fn notify_car_crash(&self, location: &str) {
        println!("Police will assist with car crash at {}", location);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let tickets = QueueSystem::<Ticket>::new("support");
    let console = tickets.subscribe(Arc::new(ConsoleListener));

    tickets.enqueue(Ticket::new("Wireframe Tinder for dogs", Priority::Low));
    tickets.enqueue(Ticket::new("Set up 45 monitor", Priority::Medium));
    tickets.enqueue(Ticket::new("There is smoke coming out of my computer", Priority::High));
    tickets.enqueue(Ticket::new("Put googly eyes on roomba", Priority::Low));
    tickets.unsubscribe(console)?;

    println!("List of Tickets in Queue:");
    for ticket in tickets.snapshot() {
        println!("{}", ticket.description);
    }

    println!("\nSorted Tickets in Queue:");
    for ticket in tickets.sorted_by(Ticket::by_descending_priority) {
        println!("{}", ticket.description);
    }

    // Work the queue down to empty, plus one miss
    while let (Some(ticket), _) = tickets.dequeue() {
        println!("Handled: {}", ticket.description);
    }

    let monster = Creature::from(Monster::new(700, 37));
    let monster_copy = monster.copy();
    println!("\nWatch out! That monster's level is {}", monster_copy.level());

    let eyeball = Creature::from(EyeballMonster::new(3002, 60, 999));
    let eyeball_copy = EyeballMonster::try_from(&eyeball.copy())?;
    println!("Eww! Its eyeball redness is {}", eyeball_copy.redness);
    if let Err(err) = EyeballMonster::try_from(&monster) {
        println!("Refused: {}", err);
    }

    let mut dispatch: MulticastDelegate<dyn EmergencyResponder> = MulticastDelegate::new();
    let _police = dispatch.add_delegate(Arc::new(PoliceStation));
    let fire = dispatch.add_delegate(Arc::new(FireStation));
    println!();
    dispatch.invoke_delegates(|responder| responder.notify_fire("Ray's house"));
    dispatch.invoke_delegates(|responder| responder.notify_car_crash("Main Street"));
    dispatch.remove_delegate(fire)?;
    println!();
    dispatch.invoke_delegates(|responder| responder.notify_fire("Ray's garage!"));

    let today = Local::now().date_naive();
    let birthday = today - Duration::days(2 * 366);
    let stuart = PetViewModel::new(Pet::new("Stuart", birthday, Rarity::VeryRare, "stuart"));
    let card = stuart.card(today);
    println!("\n{} ({}), {}, adoption fee {}", card.name, card.image, card.age, card.adoption_fee);

    println!("\nQueue log:");
    write_ndjson(&tickets.logs(), io::stdout().lock())?;
    Ok(())
}
