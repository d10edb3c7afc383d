//! Starter templates shown when a document switches to a language.

pub const JAVASCRIPT: &str = r#"// Start coding in JavaScript

function greet(name) {
  return `Hello, ${name}!`;
}

console.log(greet("World"));
"#;

pub const TYPESCRIPT: &str = r#"// TypeScript with type safety
interface User {
  name: string;
  age: number;
}

function greetUser(user: User): string {
  return `Hello, ${user.name}! You are ${user.age} years old.`;
}

const user: User = { name: "Alice", age: 25 };
console.log(greetUser(user));
"#;

pub const PYTHON: &str = r#"# Start coding in Python

def greet(name: str) -> str:
    return f"Hello, {name}!"

print(greet("World"))
"#;

pub const CPP: &str = r#"// Start coding in C++

#include <iostream>
#include <string>

std::string greet(const std::string& name) {
    return "Hello, " + name + "!";
}

int main() {
    std::cout << greet("World") << std::endl;
    return 0;
}
"#;

pub const C: &str = r#"// Start coding in C

#include <stdio.h>

void greet(const char* name) {
    printf("Hello, %s!\n", name);
}

int main() {
    greet("World");
    return 0;
}
"#;

pub const JAVA: &str = r#"// Start coding in Java

public class Main {
    public static String greet(String name) {
        return "Hello, " + name + "!";
    }

    public static void main(String[] args) {
        System.out.println(greet("World"));
    }
}
"#;

pub const RUST: &str = r#"// Start coding in Rust

fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

fn main() {
    println!("{}", greet("World"));
}
"#;

pub const GO: &str = r#"// Start coding in Go

package main

import "fmt"

func greet(name string) string {
    return fmt.Sprintf("Hello, %s!", name)
}

func main() {
    fmt.Println(greet("World"))
}
"#;

pub const RUBY: &str = r#"# Start coding in Ruby

def greet(name)
  "Hello, #{name}!"
end

puts greet("World")
"#;
