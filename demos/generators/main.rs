use fleetgen::generators::*;

fn main() {
    // Create our generator
    let mut rng = rand::thread_rng();

    // Generate a random int
    let my_int = generate_integer(&mut rng, 0, 1_000_000);
    println!("Random int: {}", my_int);

    // Generate a random rounded float
    let my_float = generate_float(&mut rng, 3.2, 5.2, 2);
    println!("Random float: {}", my_float);

    // Generate a random string
    let my_string = generate_string(&mut rng, 10);
    println!("Random string: {}", my_string);

    // Generate a choice from a slice
    let my_vector = vec!["North", "South", "East", "West", "Central"];
    let my_choice = generate_choice(&mut rng, &my_vector);
    println!("Random choice from {:?}: {}", my_vector, my_choice);

    // Generate a weighted flag
    let my_flag = generate_flag(&mut rng, 0.87);
    println!("Random flag: {}", my_flag);
}
