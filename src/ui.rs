//! Interactive menu - prompts, task display, and the command loop

use std::io::{self, BufRead, Write};

use crate::app::App;
use crate::core::{MarkDone, StoreError, Task};
use crate::Result;

/// Run the menu loop until the user exits (or stdin closes)
pub fn run(app: &mut App) -> Result<()> {
    welcome();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        show_menu();
        let Some(choice) = read_line(&mut input)? else {
            break; // EOF behaves like exit
        };

        match choice.trim() {
            "1" => add_task(app, &mut input)?,
            "2" => mark_task_done(app, &mut input)?,
            "3" => show_tasks(app.store.list()),
            "4" => remove_task(app, &mut input)?,
            "5" => clear_screen(),
            "0" => {
                exit_message();
                break;
            }
            other => println!("Unknown option: {other}"),
        }
    }
    Ok(())
}

fn add_task(app: &mut App, input: &mut impl BufRead) -> Result<()> {
    let Some(name) = prompt(input, "Enter the Task Name (not more than 39 chars): ")? else {
        return Ok(());
    };
    let Some(description) =
        prompt(input, "Enter the Task Description (not more than 99 chars): ")?
    else {
        return Ok(());
    };

    let task = app.store.create(name, description);
    println!("Added Task with Task Id {}.", task.id);
    Ok(())
}

fn mark_task_done(app: &mut App, input: &mut impl BufRead) -> Result<()> {
    show_tasks(app.store.list());
    if app.store.count() == 0 {
        return Ok(());
    }

    let Some(id) = prompt_id(
        input,
        "Enter the Task Id of the Task you want to mark as Done: ",
    )?
    else {
        return Ok(());
    };

    match app.store.mark_done(id) {
        Ok(MarkDone::Completed) => println!("Marked Task with Task Id {id} as done!!"),
        Ok(MarkDone::AlreadyDone) => println!("Task with Task Id {id} is already done."),
        Err(StoreError::NotFound { .. }) => println!("Invalid Task Id!!."),
    }
    Ok(())
}

fn remove_task(app: &mut App, input: &mut impl BufRead) -> Result<()> {
    if app.store.count() == 0 {
        println!("There are no tasks to remove!!");
        return Ok(());
    }

    let Some(id) = prompt_id(input, "Enter the Task Id: ")? else {
        return Ok(());
    };

    match app.store.remove(id) {
        Ok(_) => println!("Task with Task Id {id} is removed."),
        Err(StoreError::NotFound { .. }) => println!("Invalid Task Id!!."),
    }
    Ok(())
}

fn show_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No Tasks to show!!");
        return;
    }
    for task in tasks {
        display_task(task);
    }
}

fn display_task(task: &Task) {
    println!();
    println!("************************************************************************");
    println!("Task Id: {}", task.id);
    println!("Task Name: {}", task.name);
    println!("Task Description: {}", task.description);
    println!("Task Status: {}", task.status_label());
    println!("************************************************************************");
}

fn welcome() {
    println!();
    println!("Welcome to TaskDeck!!");
    println!("You can keep log of your tasks and make your day productive.");
    println!("Enjoy the App :)");
}

fn show_menu() {
    println!();
    println!("Press 1: to add a new task.");
    println!("Press 2: to mark a task as done.");
    println!("Press 3: to show all tasks.");
    println!("Press 4: to remove a task.");
    println!("Press 5: to clear the screen.");
    println!("Press 0: to exit the program.");
}

fn exit_message() {
    println!();
    println!("Thank you for using this application!!");
}

fn clear_screen() {
    // Clear screen and move cursor to (1,1)
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}

/// Print a prompt and read one trimmed line; `None` on EOF
fn prompt(input: &mut impl BufRead, msg: &str) -> Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    Ok(read_line(input)?.map(|line| line.trim().to_string()))
}

/// Like `prompt`, but parses an id; non-numeric input is reported the
/// same way as an unknown id
fn prompt_id(input: &mut impl BufRead, msg: &str) -> Result<Option<i32>> {
    let Some(line) = prompt(input, msg)? else {
        return Ok(None);
    };
    match line.parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("Invalid Task Id!!.");
            Ok(None)
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
