use colour::red;

pub fn print_intro() {
    println!(
        r#"
      __                        
     / /__________ _________  _____
    / __/ ___/ __ `/ ___/ _ \/ ___/
   / /_/ /  / /_/ / /__/  __/ /    
   \__/_/   \__,_/\___/\___/_/     "#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Keep in mind that everything is way slower than it should be.\n\n");
    }
}
